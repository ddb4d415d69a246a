//! Response DTOs for the customer service API
//!
//! Defines the structure of outgoing HTTP response bodies. Create, update
//! and get respond with the `Customer` record itself.

use serde::{ser::SerializeMap, Serialize, Serializer};

/// Response body for the DELETE operation (DELETE /customers/:id)
///
/// Serializes as a single-entry object keyed by the identifier as it
/// appeared in the path: `{"id #5": "deleted"}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteResponse {
    /// The path identifier that was deleted
    pub id: String,
}

impl DeleteResponse {
    /// Creates a new DeleteResponse
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Object key acknowledging the deletion
    pub fn label(&self) -> String {
        format!("id #{}", self.id)
    }
}

impl Serialize for DeleteResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.label(), "deleted")?;
        map.end()
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
