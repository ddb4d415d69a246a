//! Request DTOs for the customer service API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

use crate::error::{CustomerError, Result};
use crate::models::{CustomerId, NewCustomer};

/// Request body for create (POST /customers) and update (PUT /customers/:id)
///
/// # Fields
/// - `id`: Optional; absent, `null` and `0` all mean "not specified"
/// - `name`: Defaults to an empty string when omitted
/// - `age`: Defaults to zero when omitted
///
/// Omitted fields are not merged with stored values: an update replaces
/// both `name` and `age` with whatever the body carries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CustomerPayload {
    /// Optional identifier, only checked on update
    #[serde(default)]
    pub id: Option<CustomerId>,
    /// Customer name
    #[serde(default)]
    pub name: String,
    /// Customer age
    #[serde(default)]
    pub age: i64,
}

impl CustomerPayload {
    /// Decodes a JSON body. The request's content type is not consulted.
    pub fn from_json(body: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(body)?)
    }

    /// The body id if one was given, treating `0` as unset.
    pub fn specified_id(&self) -> Option<CustomerId> {
        self.id.filter(|id| *id != 0)
    }

    /// Rejects a body whose id disagrees with the path identifier.
    pub fn check_id(&self, path_id: CustomerId) -> Result<()> {
        match self.specified_id() {
            Some(body_id) if body_id != path_id => Err(CustomerError::IdMismatch {
                path: path_id,
                body: body_id,
            }),
            _ => Ok(()),
        }
    }

    /// Drops the id; the store always assigns a fresh one.
    pub fn into_new_customer(self) -> NewCustomer {
        NewCustomer::new(self.name, self.age)
    }
}
