//! API Routes
//!
//! Configures the Axum router with all customer service endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    create_customer_handler, delete_customer_handler, get_customer_handler, health_handler,
    update_customer_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /customers` - Create a customer
/// - `GET /customers/:id` - Fetch a customer
/// - `PUT /customers/:id` - Replace a customer's name and age
/// - `DELETE /customers/:id` - Delete a customer
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route("/customers", post(create_customer_handler))
        .route(
            "/customers/:id",
            get(get_customer_handler)
                .put(update_customer_handler)
                .delete(delete_customer_handler),
        )
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
