//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for every
//! custbook operation. It dispatches to `commands/*.rs` and returns
//! `Result<CmdResult>`; it never prints and never exits.
//!
//! `CustbookApi<S: DataStore>` is generic over storage:
//! - Production: `CustbookApi<FileStore>`
//! - Testing: `CustbookApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::model::{CustomerUpdate, NewCustomer};
use crate::store::DataStore;

pub struct CustbookApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> CustbookApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn list_customers(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn add_customer(&mut self, fields: NewCustomer) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, fields)
    }

    pub fn edit_customer(
        &mut self,
        id: u64,
        update: &CustomerUpdate,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, id, update)
    }

    pub fn delete_customer(&mut self, id: u64) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
