use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CustbookError, Result};
use crate::records;
use crate::store::DataStore;

/// Removes the customer with `id`. The remaining customers are returned as
/// the listing.
pub fn run<S: DataStore>(store: &mut S, id: u64) -> Result<CmdResult> {
    let customers = store.load()?;
    let removed = records::find_by_id(&customers, id)
        .cloned()
        .ok_or(CustbookError::CustomerNotFound(id))?;

    let remaining = records::delete(customers, id);
    store.save(&remaining)?;

    let mut result = CmdResult::default()
        .with_affected_customers(vec![removed])
        .with_listed_customers(remaining);
    result.add_message(CmdMessage::success(format!("Deleted customer {}.", id)));
    result.add_message(CmdMessage::info("Remaining customers:"));
    Ok(result)
}
