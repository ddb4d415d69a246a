//! Error types for the customer service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{error, warn};

use crate::models::{CustomerId, ErrorResponse};

// == Customer Error Enum ==
/// Unified error type for the customer service.
#[derive(Error, Debug)]
pub enum CustomerError {
    /// No customer stored under the identifier
    #[error("Customer not found: {0}")]
    NotFound(String),

    /// Path identifier is not a non-negative integer
    #[error("Invalid customer id: {0}")]
    InvalidId(String),

    /// Body carries an id that disagrees with the path
    #[error("ID not matched: path id {path}, body id {body}")]
    IdMismatch { path: CustomerId, body: CustomerId },

    /// Request body could not be decoded
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Query or connection failure in the database driver
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration failed at startup
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CustomerError {
    /// HTTP status this error is reported with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            CustomerError::NotFound(_) => StatusCode::NOT_FOUND,
            CustomerError::InvalidId(_)
            | CustomerError::IdMismatch { .. }
            | CustomerError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            CustomerError::Database(_)
            | CustomerError::Migration(_)
            | CustomerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<serde_json::Error> for CustomerError {
    fn from(err: serde_json::Error) -> Self {
        CustomerError::InvalidBody(err.to_string())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for CustomerError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            error!(error = %self, "request failed");
        } else {
            warn!(status = status.as_u16(), error = %self, "request rejected");
        }

        // Driver details stay in the log, not in the response
        let message = match &self {
            CustomerError::Database(_) | CustomerError::Migration(_) => {
                "Database error".to_string()
            }
            other => other.to_string(),
        };

        let body = Json(ErrorResponse::new(message));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the customer service.
pub type Result<T> = std::result::Result<T, CustomerError>;
