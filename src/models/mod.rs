//! Domain and transport models for the customer service API
//!
//! `Customer` is the persisted record; the request and response modules
//! hold the DTOs (Data Transfer Objects) used for HTTP bodies.

pub mod customer;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use customer::{parse_customer_id, Customer, CustomerId, NewCustomer};
pub use requests::CustomerPayload;
pub use responses::{DeleteResponse, ErrorResponse, HealthResponse};
