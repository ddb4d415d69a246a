//! API Module
//!
//! HTTP handlers and routing for the customer REST API.
//!
//! # Endpoints
//! - `POST /customers` - Create a customer
//! - `GET /customers/:id` - Fetch a customer
//! - `PUT /customers/:id` - Update a customer
//! - `DELETE /customers/:id` - Delete a customer
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
