use serde::{Deserialize, Serialize};

/// A customer record. The name is the catalog key; everything else is contact detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Customer {
    pub fn new(name: impl Into<String>, email: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    pub fn details(&self) -> ContactDetails {
        ContactDetails {
            email: self.email.clone(),
            phone: self.phone.clone(),
        }
    }
}

/// The value stored under each name in the store file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    #[serde(default)]
    pub email: String,
    // Older stores were written with the German key.
    #[serde(default, alias = "telefon")]
    pub phone: String,
}

impl ContactDetails {
    pub fn into_customer(self, name: String) -> Customer {
        Customer {
            name,
            email: self.email,
            phone: self.phone,
        }
    }
}
