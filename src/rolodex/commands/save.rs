use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;
use tracing::error;

/// Writes the whole catalog. On success the catalog is marked clean.
pub fn run<S: DataStore>(store: &mut S, catalog: &mut Catalog) -> Result<CmdResult> {
    if let Err(e) = store.save(catalog) {
        error!(error = %e, "save failed");
        return Err(e);
    }
    catalog.mark_clean();

    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Saved {} customer(s) to {}.",
        catalog.len(),
        store.location()
    ))))
}
