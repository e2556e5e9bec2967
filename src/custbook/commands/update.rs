use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CustbookError, Result};
use crate::model::CustomerUpdate;
use crate::records;
use crate::store::DataStore;

/// Applies `update` to the customer with `id` and persists the list.
///
/// Fails with [`CustbookError::CustomerNotFound`] before any write when the id
/// is unknown. An update with no fields leaves the file untouched.
pub fn run<S: DataStore>(store: &mut S, id: u64, update: &CustomerUpdate) -> Result<CmdResult> {
    let mut customers = store.load()?;
    let customer = records::find_by_id_mut(&mut customers, id)
        .ok_or(CustbookError::CustomerNotFound(id))?;

    update.apply(customer);
    let updated = customer.clone();
    if update.is_empty() {
        tracing::debug!(id, "no fields to update, skipping save");
    } else {
        store.save(&customers)?;
    }

    let mut result = CmdResult::default()
        .with_affected_customers(vec![updated.clone()])
        .with_listed_customers(vec![updated]);
    result.add_message(CmdMessage::success("Updated customer:"));
    Ok(result)
}
