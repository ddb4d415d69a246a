//! SQLite Store Module
//!
//! Customer store backed by a sqlx SQLite connection pool.

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::info;

use crate::error::{CustomerError, Result};
use crate::models::{Customer, CustomerId, NewCustomer};
use crate::store::CustomerStore;

// == SQLite Customer Store ==
/// Customer store persisting to the `customers` table.
#[derive(Debug, Clone)]
pub struct SqliteCustomerStore {
    pool: SqlitePool,
}

impl SqliteCustomerStore {
    /// Wraps an existing pool. The schema is not touched.
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens a pool for `database_url`, creating the database file if needed.
    ///
    /// # Errors
    ///
    /// Returns `CustomerError::Database` if the URL is invalid or the
    /// connection cannot be established.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(10))
            .connect_with(options)
            .await?;

        info!(database_url, max_connections, "Connected to SQLite");
        Ok(Self::from_pool(pool))
    }

    /// Opens a private in-memory database with the schema applied.
    ///
    /// The pool holds exactly one connection that is never recycled, since
    /// every SQLite `:memory:` connection is its own database.
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        let store = Self::from_pool(pool);
        store.migrate().await?;
        Ok(store)
    }

    /// Applies the embedded migrations in `migrations/`.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!().run(&self.pool).await?;
        Ok(())
    }

    /// Closes the pool, waiting for checked-out connections to return.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl CustomerStore for SqliteCustomerStore {
    async fn insert(&self, customer: NewCustomer) -> Result<Customer> {
        let record = sqlx::query_as::<_, Customer>(
            r#"
            INSERT INTO customers (name, age)
            VALUES (?, ?)
            RETURNING id, name, age
            "#,
        )
        .bind(&customer.name)
        .bind(customer.age)
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }

    async fn get(&self, id: CustomerId) -> Result<Customer> {
        sqlx::query_as::<_, Customer>("SELECT id, name, age FROM customers WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| CustomerError::NotFound(id.to_string()))
    }

    async fn update(&self, customer: &Customer) -> Result<()> {
        let result = sqlx::query("UPDATE customers SET name = ?, age = ? WHERE id = ?")
            .bind(&customer.name)
            .bind(customer.age)
            .bind(customer.id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(CustomerError::NotFound(customer.id.to_string()));
        }
        Ok(())
    }

    async fn delete(&self, id: CustomerId) -> Result<()> {
        let result = sqlx::query("DELETE FROM customers WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(CustomerError::NotFound(id.to_string()));
        }
        Ok(())
    }

    async fn len(&self) -> Result<u64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM customers")
            .fetch_one(&self.pool)
            .await?;

        Ok(u64::try_from(count).unwrap_or_default())
    }
}
