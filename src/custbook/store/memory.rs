use super::DataStore;
use crate::error::Result;
use crate::model::Customer;

/// In-memory storage for testing.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    customers: Vec<Customer>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_customers(customers: Vec<Customer>) -> Self {
        Self {
            customers,
            saves: 0,
        }
    }

    /// Number of times `save` has been called.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Customer>> {
        Ok(self.customers.clone())
    }

    fn save(&mut self, customers: &[Customer]) -> Result<()> {
        self.customers = customers.to_vec();
        self.saves += 1;
        Ok(())
    }
}
