//! # Storage Layer
//!
//! The [`DataStore`] trait lets commands load and persist the customer list
//! without knowing where it lives.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, a single JSON array on disk
//! - [`memory::InMemoryStore`]: non-persistent storage for tests
//!
//! ## Storage Format
//!
//! ```text
//! customers.json
//! [
//!   { "id": 1, "name": "Ann", "phone": "555-1000", "email": "", "notes": "" },
//!   ...
//! ]
//! ```
//!
//! The whole list is read on every command and rewritten on every mutation.
//! Record order on disk is insertion order and is preserved across cycles.

use crate::error::Result;
use crate::model::Customer;

pub mod fs;
pub mod memory;

/// Abstract interface for customer storage.
pub trait DataStore {
    /// Load every customer, in stored order.
    ///
    /// A missing or malformed backing resource yields an empty list.
    fn load(&self) -> Result<Vec<Customer>>;

    /// Replace the stored list with `customers`.
    fn save(&mut self, customers: &[Customer]) -> Result<()>;
}

/// Returns the id the next created customer should get: one past the largest
/// existing id, or 1 for an empty list.
pub fn next_id(customers: &[Customer]) -> u64 {
    customers.iter().map(|c| c.id).max().map_or(1, |max| max + 1)
}
