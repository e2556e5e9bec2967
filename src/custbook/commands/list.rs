use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let customers = store.load()?;
    Ok(CmdResult::default().with_listed_customers(customers))
}
