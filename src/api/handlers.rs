//! API Handlers
//!
//! HTTP request handlers for each customer endpoint. Every handler returns
//! `Result`; `CustomerError` decides the status code and logs the failure.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};
use tracing::debug;

use crate::error::{CustomerError, Result};
use crate::models::{
    parse_customer_id, Customer, CustomerId, CustomerPayload, DeleteResponse, HealthResponse,
};
use crate::store::CustomerStore;

/// Application state shared across all handlers.
///
/// Holds the injected customer store; cloning shares the same store.
#[derive(Clone)]
pub struct AppState {
    /// Shared customer store
    pub store: Arc<dyn CustomerStore>,
}

impl AppState {
    /// Creates a new AppState around the given store.
    pub fn new(store: impl CustomerStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

/// Resolves a path identifier for lookups.
///
/// A segment that is not a non-negative integer cannot name any stored
/// record, so it is reported as not found.
fn lookup_id(raw_id: &str) -> Result<CustomerId> {
    parse_customer_id(raw_id).ok_or_else(|| CustomerError::NotFound(raw_id.to_string()))
}

/// Handler for POST /customers
///
/// Stores a new customer; any `id` in the body is ignored. The body is
/// read as JSON whatever the `Content-Type` header says.
pub async fn create_customer_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Customer>> {
    let payload = CustomerPayload::from_json(&body)?;

    let customer = state.store.insert(payload.into_new_customer()).await?;
    debug!(id = customer.id, "Created customer");

    Ok(Json(customer))
}

/// Handler for PUT /customers/:id
///
/// Replaces `name` and `age` of an existing customer. Fields missing from
/// the body are written as their zero values.
pub async fn update_customer_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> Result<Json<Customer>> {
    let id = parse_customer_id(&raw_id).ok_or(CustomerError::InvalidId(raw_id))?;
    let payload = CustomerPayload::from_json(&body)?;
    payload.check_id(id)?;

    let mut customer = state.store.get(id).await?;
    customer.apply(payload.name, payload.age);
    state.store.update(&customer).await?;
    debug!(id, "Updated customer");

    Ok(Json(customer))
}

/// Handler for DELETE /customers/:id
pub async fn delete_customer_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<DeleteResponse>> {
    let id = lookup_id(&raw_id)?;

    state.store.get(id).await?;
    state.store.delete(id).await?;
    debug!(id, "Deleted customer");

    Ok(Json(DeleteResponse::new(raw_id)))
}

/// Handler for GET /customers/:id
pub async fn get_customer_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Customer>> {
    let id = lookup_id(&raw_id)?;
    let customer = state.store.get(id).await?;

    Ok(Json(customer))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
