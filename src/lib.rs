//! Customer Service - A small HTTP service for customer records
//!
//! Maps `POST`/`GET`/`PUT`/`DELETE` on `/customers` onto a keyed store
//! backed by SQLite.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use api::{create_router, AppState};
pub use config::Config;
pub use error::{CustomerError, Result};
pub use store::{CustomerStore, MemoryCustomerStore, SqliteCustomerStore};
