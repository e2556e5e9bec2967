//! Operations over an in-memory customer list.
//!
//! These functions never touch storage; commands load the list, call into
//! here, and persist the result themselves.

use crate::model::{Customer, NewCustomer};
use crate::store::next_id;

pub fn find_by_id(customers: &[Customer], id: u64) -> Option<&Customer> {
    customers.iter().find(|c| c.id == id)
}

pub fn find_by_id_mut(customers: &mut [Customer], id: u64) -> Option<&mut Customer> {
    customers.iter_mut().find(|c| c.id == id)
}

/// Appends a new customer with a freshly assigned id and returns a copy of it.
pub fn create(customers: &mut Vec<Customer>, fields: NewCustomer) -> Customer {
    let id = next_id(customers);
    let customer = fields.into_customer(id);
    tracing::debug!(id, "assigned customer id");
    customers.push(customer.clone());
    customer
}

/// Returns the list without any customer carrying `id`.
pub fn delete(customers: Vec<Customer>, id: u64) -> Vec<Customer> {
    customers.into_iter().filter(|c| c.id != id).collect()
}
