use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RolodexError};
use tracing::debug;

/// Removes `name` only when `confirmed` is true.
///
/// A missing name is `NotFound` whether or not the caller confirmed.
pub fn run(catalog: &mut Catalog, name: &str, confirmed: bool) -> Result<CmdResult> {
    if !catalog.contains(name) {
        return Err(RolodexError::NotFound(name.to_string()));
    }

    if !confirmed {
        return Ok(CmdResult::default().with_message(CmdMessage::info(format!(
            "Deletion of '{}' cancelled.",
            name
        ))));
    }

    let removed = catalog.remove(name)?;
    debug!(name = %removed.name, "customer deleted");
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Customer '{}' deleted.",
            removed.name
        )))
        .with_affected_customers(vec![removed]))
}
