//! # API Facade
//!
//! A thin facade over the command layer. It owns the [`Catalog`] and the store it was
//! loaded from, and is the single entry point a UI drives.
//!
//! The API does no I/O of its own beyond what the store does, and never formats output:
//! every method returns `Result<CmdResult>` and the caller decides how to show it.
//!
//! `RolodexApi<S: DataStore>` is generic over the storage backend:
//! - Production: `RolodexApi<FileStore>`
//! - Testing: `RolodexApi<InMemoryStore>`

use crate::catalog::Catalog;
use crate::commands;
use crate::error::Result;
use crate::model::Customer;
use crate::store::DataStore;

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

pub struct RolodexApi<S: DataStore> {
    store: S,
    catalog: Catalog,
}

impl<S: DataStore> RolodexApi<S> {
    /// Loads the catalog from `store`. Load problems never fail here; they come back
    /// as messages in the returned result.
    pub fn open(store: S) -> (Self, commands::CmdResult) {
        let (catalog, result) = commands::load::run(&store);
        (Self { store, catalog }, result)
    }

    pub fn add_customer(
        &mut self,
        name: &str,
        email: &str,
        phone: &str,
    ) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.catalog, name, email, phone)
    }

    pub fn list_customers(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.catalog)
    }

    pub fn search_customers(&self, term: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.catalog, term)
    }

    pub fn get_customer(&self, name: &str) -> Option<&Customer> {
        self.catalog.get(name)
    }

    pub fn delete_customer(&mut self, name: &str, confirmed: bool) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.catalog, name, confirmed)
    }

    pub fn save(&mut self) -> Result<commands::CmdResult> {
        commands::save::run(&mut self.store, &mut self.catalog)
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.catalog.is_dirty()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
