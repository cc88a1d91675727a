use super::DataStore;
use crate::catalog::Catalog;
use crate::error::{Result, RolodexError};
use std::path::PathBuf;

const MEMORY_LOCATION: &str = "<memory>";

/// In-memory storage for testing and development.
///
/// Keeps the serialized JSON rather than a `Catalog`, so loads go through the same
/// parsing as the file store and corrupt content can be simulated.
#[derive(Default)]
pub struct InMemoryStore {
    content: Option<String>,
    fail_writes: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose backing text is exactly `content`.
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            fail_writes: false,
        }
    }

    /// Makes every subsequent save fail with a write error.
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Catalog> {
        let content = self
            .content
            .as_ref()
            .ok_or_else(|| RolodexError::StorageMissing(PathBuf::from(MEMORY_LOCATION)))?;
        serde_json::from_str(content).map_err(|source| RolodexError::StorageCorrupt {
            path: PathBuf::from(MEMORY_LOCATION),
            source,
        })
    }

    fn save(&mut self, catalog: &Catalog) -> Result<()> {
        if self.fail_writes {
            return Err(RolodexError::StorageWriteFailure {
                path: PathBuf::from(MEMORY_LOCATION),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            });
        }
        self.content = Some(serde_json::to_string_pretty(catalog)?);
        Ok(())
    }

    fn location(&self) -> String {
        MEMORY_LOCATION.to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Customer;

    pub struct CatalogFixture {
        pub catalog: Catalog,
    }

    impl Default for CatalogFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl CatalogFixture {
        pub fn new() -> Self {
            Self {
                catalog: Catalog::new(),
            }
        }

        pub fn with_customers(mut self, count: usize) -> Self {
            for i in 0..count {
                let customer = Customer::new(
                    format!("Customer {}", i + 1),
                    format!("customer{}@example.com", i + 1),
                    format!("555000{}", i + 1),
                );
                self.catalog.add(customer).unwrap();
            }
            self
        }

        pub fn with_customer(mut self, name: &str, email: &str, phone: &str) -> Self {
            self.catalog.add(Customer::new(name, email, phone)).unwrap();
            self
        }

        /// The catalog as if freshly loaded from storage.
        pub fn build(mut self) -> Catalog {
            self.catalog.mark_clean();
            self.catalog
        }

        /// A store already holding the fixture catalog.
        pub fn into_store(self) -> InMemoryStore {
            let mut store = InMemoryStore::new();
            store.save(&self.build()).unwrap();
            store
        }
    }
}
