use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Customer;
use tracing::debug;

pub fn run(catalog: &mut Catalog, name: &str, email: &str, phone: &str) -> Result<CmdResult> {
    let added = Customer::new(name, email, phone);
    catalog.add(added.clone())?;
    debug!(name = %added.name, "customer added");

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Customer '{}' added.",
            added.name
        )))
        .with_affected_customers(vec![added]))
}
