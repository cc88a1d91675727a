use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::RolodexError;
use crate::store::DataStore;
use tracing::{debug, error, warn};

/// Reads the catalog from `store`. Never fails: every storage problem starts an empty
/// catalog and is reported through the returned messages.
pub fn run<S: DataStore>(store: &S) -> (Catalog, CmdResult) {
    let mut result = CmdResult::default();

    let catalog = match store.load() {
        Ok(mut catalog) => {
            catalog.mark_clean();
            result.add_message(CmdMessage::info(format!(
                "Loaded {} customer(s) from {}.",
                catalog.len(),
                store.location()
            )));
            catalog
        }
        Err(RolodexError::StorageMissing(path)) => {
            debug!(path = %path.display(), "no store yet, starting empty");
            result.add_message(CmdMessage::info(format!(
                "No customer file at {} yet, starting with an empty catalog.",
                path.display()
            )));
            Catalog::new()
        }
        Err(e @ RolodexError::StorageCorrupt { .. }) => {
            warn!(error = %e, "store unreadable, starting empty");
            result.add_message(CmdMessage::warning(format!(
                "{}. Starting with an empty catalog.",
                e
            )));
            Catalog::new()
        }
        Err(e) => {
            error!(error = %e, "could not load store");
            result.add_message(CmdMessage::error(format!(
                "Could not load customers: {}. Starting with an empty catalog.",
                e
            )));
            Catalog::new()
        }
    };

    (catalog, result)
}
