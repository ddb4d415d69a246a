//! Store Module
//!
//! Keyed persistence for customer records. Handlers only see the
//! `CustomerStore` trait; the concrete store is chosen at startup.

mod memory;
mod seed;
mod sqlite;


use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Customer, CustomerId, NewCustomer};

// Re-export public types
pub use memory::MemoryCustomerStore;
pub use seed::{seed_customers, SEED_CUSTOMERS};
pub use sqlite::SqliteCustomerStore;

// == Customer Store Trait ==
/// Keyed CRUD over customer records.
///
/// Every method is a single store round trip. Callers that read and then
/// write (update) get no atomicity across the two calls: concurrent
/// updates to one id are last-write-wins.
#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// Inserts a record and returns it with its freshly assigned id.
    ///
    /// Ids are never reused, even after the record holding one is deleted.
    async fn insert(&self, customer: NewCustomer) -> Result<Customer>;

    /// Fetches a record, failing with `NotFound` when absent.
    async fn get(&self, id: CustomerId) -> Result<Customer>;

    /// Overwrites the stored `name` and `age` for `customer.id`.
    async fn update(&self, customer: &Customer) -> Result<()>;

    /// Removes a record, failing with `NotFound` when absent.
    async fn delete(&self, id: CustomerId) -> Result<()>;

    /// Number of stored records.
    async fn len(&self) -> Result<u64>;

    async fn is_empty(&self) -> Result<bool> {
        Ok(self.len().await? == 0)
    }
}
