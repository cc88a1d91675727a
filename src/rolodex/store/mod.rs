//! # Storage Layer
//!
//! The [`DataStore`] trait hides where the catalog is persisted.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, a single pretty-printed JSON file
//! - [`memory::InMemoryStore`]: holds the serialized text in memory, for tests
//!
//! ## Storage Format
//!
//! ```text
//! {
//!   "Alice": {
//!     "email": "a@b.com",
//!     "phone": "12345"
//!   }
//! }
//! ```
//!
//! Keys are customer names in catalog order. Stores only move whole catalogs: there is
//! no per-record write, a save always rewrites everything.
//!
//! Loading reports a missing store as [`RolodexError::StorageMissing`] and unparseable
//! content as [`RolodexError::StorageCorrupt`]. Deciding that both mean "start empty" is
//! left to the load command.
//!
//! [`RolodexError::StorageMissing`]: crate::error::RolodexError::StorageMissing
//! [`RolodexError::StorageCorrupt`]: crate::error::RolodexError::StorageCorrupt

use crate::catalog::Catalog;
use crate::error::Result;

pub mod fs;
pub mod memory;

pub trait DataStore {
    /// Read the full catalog.
    fn load(&self) -> Result<Catalog>;

    /// Overwrite the store with the full catalog.
    fn save(&mut self, catalog: &Catalog) -> Result<()>;

    /// Human readable location, used in messages.
    fn location(&self) -> String;
}
