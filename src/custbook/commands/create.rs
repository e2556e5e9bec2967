use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NewCustomer;
use crate::records;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, fields: NewCustomer) -> Result<CmdResult> {
    let mut customers = store.load()?;
    let customer = records::create(&mut customers, fields);
    store.save(&customers)?;

    let mut result = CmdResult::default()
        .with_affected_customers(vec![customer.clone()])
        .with_listed_customers(vec![customer]);
    result.add_message(CmdMessage::success("Added customer:"));
    Ok(result)
}
