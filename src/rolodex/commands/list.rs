use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(catalog: &Catalog) -> Result<CmdResult> {
    if catalog.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info("The catalog is empty.")));
    }

    let listed = catalog.iter().cloned().collect();
    Ok(CmdResult::default().with_listed_customers(listed))
}
