//! Memory Store Module
//!
//! In-process customer store backed by a BTreeMap.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{CustomerError, Result};
use crate::models::{Customer, CustomerId, NewCustomer};
use crate::store::CustomerStore;

// == Memory Customer Store ==
/// Customer store held entirely in memory.
///
/// Ids start at 1 and increase monotonically, mirroring SQLite's
/// `AUTOINCREMENT`.
#[derive(Debug)]
pub struct MemoryCustomerStore {
    inner: RwLock<Inner>,
}

#[derive(Debug)]
struct Inner {
    /// Records keyed by id
    customers: BTreeMap<CustomerId, Customer>,
    /// Id handed out by the next insert
    next_id: CustomerId,
}

impl MemoryCustomerStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                customers: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for MemoryCustomerStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CustomerStore for MemoryCustomerStore {
    // == Insert ==
    async fn insert(&self, customer: NewCustomer) -> Result<Customer> {
        let mut inner = self.inner.write().await;

        let id = inner.next_id;
        inner.next_id = id
            .checked_add(1)
            .ok_or_else(|| CustomerError::Internal("customer id space exhausted".to_string()))?;

        let record = customer.with_id(id);
        inner.customers.insert(id, record.clone());
        Ok(record)
    }

    // == Get ==
    async fn get(&self, id: CustomerId) -> Result<Customer> {
        let inner = self.inner.read().await;
        inner
            .customers
            .get(&id)
            .cloned()
            .ok_or_else(|| CustomerError::NotFound(id.to_string()))
    }

    // == Update ==
    async fn update(&self, customer: &Customer) -> Result<()> {
        let mut inner = self.inner.write().await;
        match inner.customers.get_mut(&customer.id) {
            Some(stored) => {
                stored.apply(customer.name.clone(), customer.age);
                Ok(())
            }
            None => Err(CustomerError::NotFound(customer.id.to_string())),
        }
    }

    // == Delete ==
    async fn delete(&self, id: CustomerId) -> Result<()> {
        let mut inner = self.inner.write().await;
        if inner.customers.remove(&id).is_some() {
            Ok(())
        } else {
            Err(CustomerError::NotFound(id.to_string()))
        }
    }

    // == Length ==
    async fn len(&self) -> Result<u64> {
        Ok(self.inner.read().await.customers.len() as u64)
    }
}
