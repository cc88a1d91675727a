//! # Catalog
//!
//! The in-memory collection of customers, keyed by name.
//!
//! Customers are kept in insertion order. The order only matters for display, but it is
//! also the key order written to the store, so a hand-edited file reads back the way it
//! was written.
//!
//! All validation happens in [`Catalog::add`]; a failed add never touches the catalog.

use crate::error::{Result, RolodexError};
use crate::model::{ContactDetails, Customer};
use crate::validation::{validate_email, validate_name, validate_phone};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    customers: Vec<Customer>,
    dirty: bool,
}

impl PartialEq for Catalog {
    fn eq(&self, other: &Self) -> bool {
        self.customers == other.customers
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    /// Whether the catalog changed since it was last loaded or saved.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Customer> {
        self.customers.iter()
    }

    /// Validates and appends a customer.
    ///
    /// Checks run in a fixed order: duplicate name, blank name, email, phone.
    pub fn add(&mut self, customer: Customer) -> Result<()> {
        if self.contains(&customer.name) {
            return Err(RolodexError::DuplicateName(customer.name));
        }
        validate_name(&customer.name)?;
        validate_email(&customer.email)?;
        validate_phone(&customer.phone)?;

        self.customers.push(customer);
        self.dirty = true;
        Ok(())
    }

    pub fn remove(&mut self, name: &str) -> Result<Customer> {
        let pos = self
            .position(name)
            .ok_or_else(|| RolodexError::NotFound(name.to_string()))?;
        self.dirty = true;
        Ok(self.customers.remove(pos))
    }

    /// Case-insensitive substring match on name or email, in catalog order.
    pub fn search(&self, term: &str) -> Vec<&Customer> {
        let term_lower = term.to_lowercase();
        self.customers
            .iter()
            .filter(|c| {
                c.name.to_lowercase().contains(&term_lower)
                    || c.email.to_lowercase().contains(&term_lower)
            })
            .collect()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.customers.iter().position(|c| c.name == name)
    }

    /// Inserts without validation, replacing an existing entry in place.
    /// Used when reading a store, which may have been edited by hand.
    fn upsert_unchecked(&mut self, customer: Customer) {
        match self.position(&customer.name) {
            Some(pos) => self.customers[pos] = customer,
            None => self.customers.push(customer),
        }
    }
}

impl FromIterator<Customer> for Catalog {
    fn from_iter<I: IntoIterator<Item = Customer>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        for customer in iter {
            catalog.upsert_unchecked(customer);
        }
        catalog
    }
}

impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.customers.len()))?;
        for customer in &self.customers {
            map.serialize_entry(&customer.name, &customer.details())?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = Catalog;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping customer names to contact details")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Catalog, A::Error> {
                let mut catalog = Catalog::new();
                while let Some((name, details)) = access.next_entry::<String, ContactDetails>()? {
                    catalog.upsert_unchecked(details.into_customer(name));
                }
                Ok(catalog)
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Customer {
        Customer::new("Alice", "a@b.com", "12345")
    }

    #[test]
    fn add_then_iterate() {
        let mut catalog = Catalog::new();
        catalog.add(alice()).unwrap();

        let all: Vec<_> = catalog.iter().collect();
        assert_eq!(all, vec![&alice()]);
        assert!(catalog.is_dirty());
    }

    #[test]
    fn duplicate_name_leaves_catalog_unchanged() {
        let mut catalog = Catalog::new();
        catalog.add(alice()).unwrap();
        let before = catalog.clone();

        let err = catalog
            .add(Customer::new("Alice", "other@b.com", "999"))
            .unwrap_err();
        assert!(matches!(err, RolodexError::DuplicateName(name) if name == "Alice"));
        assert_eq!(catalog, before);
        assert_eq!(catalog.get("Alice").unwrap().email, "a@b.com");
    }

    #[test]
    fn invalid_email_leaves_catalog_unchanged() {
        let mut catalog = Catalog::new();
        let err = catalog
            .add(Customer::new("Bob", "not-an-email", "123"))
            .unwrap_err();
        assert!(matches!(err, RolodexError::InvalidEmail(_)));
        assert!(catalog.is_empty());
        assert!(!catalog.is_dirty());
    }

    #[test]
    fn duplicate_is_checked_before_field_rules() {
        let mut catalog = Catalog::new();
        catalog.add(alice()).unwrap();
        let err = catalog.add(Customer::new("Alice", "bad", "x")).unwrap_err();
        assert!(matches!(err, RolodexError::DuplicateName(_)));
    }

    #[test]
    fn names_are_case_sensitive_keys() {
        let mut catalog = Catalog::new();
        catalog.add(alice()).unwrap();
        catalog.add(Customer::new("alice", "x@y.de", "1")).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn remove_missing_is_not_found() {
        let mut catalog = Catalog::new();
        assert!(matches!(
            catalog.remove("Ghost"),
            Err(RolodexError::NotFound(name)) if name == "Ghost"
        ));
    }

    #[test]
    fn search_matches_name_or_email_in_order() {
        let mut catalog = Catalog::new();
        catalog.add(Customer::new("Carol", "carol@shop.de", "1")).unwrap();
        catalog.add(alice()).unwrap();
        catalog.add(Customer::new("Dave", "dave@alice-corp.com", "2")).unwrap();

        let names: Vec<_> = catalog.search("ALICE").iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Dave"]);
        assert!(catalog.search("nobody").is_empty());
    }

    #[test]
    fn serializes_as_ordered_object() {
        let catalog: Catalog = vec![
            Customer::new("Zed", "z@z.io", "9"),
            Customer::new("Amy", "a@a.io", "1"),
        ]
        .into_iter()
        .collect();

        let json = serde_json::to_string(&catalog).unwrap();
        assert_eq!(
            json,
            r#"{"Zed":{"email":"z@z.io","phone":"9"},"Amy":{"email":"a@a.io","phone":"1"}}"#
        );

        let parsed: Catalog = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, catalog);
        assert!(!parsed.is_dirty());
    }

    #[test]
    fn reads_legacy_phone_key() {
        let json = r#"{"Kurt": {"email": "k@firma.de", "telefon": "0301234"}}"#;
        let catalog: Catalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.get("Kurt").unwrap().phone, "0301234");
    }
}
