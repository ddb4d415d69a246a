//! Startup seed data

use tracing::{debug, info};

use crate::error::Result;
use crate::models::NewCustomer;
use crate::store::CustomerStore;

/// Example records inserted by the optional seed step.
pub const SEED_CUSTOMERS: [(&str, i64); 2] = [("John Doe", 30), ("Jane Doe", 25)];

/// Inserts the example customers when the store is empty.
///
/// Returns the number of records inserted, so restarting against a
/// populated database is a no-op.
pub async fn seed_customers(store: &dyn CustomerStore) -> Result<usize> {
    if !store.is_empty().await? {
        debug!("Store already populated, skipping seed");
        return Ok(0);
    }

    for (name, age) in SEED_CUSTOMERS {
        let customer = store.insert(NewCustomer::new(name, age)).await?;
        debug!(id = customer.id, name = %customer.name, "Seeded customer");
    }

    info!("Seeded {} example customers", SEED_CUSTOMERS.len());
    Ok(SEED_CUSTOMERS.len())
}
