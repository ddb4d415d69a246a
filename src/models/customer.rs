//! Customer record
//!
//! The single entity persisted by the service.

use serde::{Deserialize, Serialize};

/// Store-assigned customer identifier.
pub type CustomerId = i64;

// == Customer ==
/// A persisted customer.
///
/// `id` is assigned by the store on insert and never changes afterwards;
/// only `name` and `age` are mutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub age: i64,
}

impl Customer {
    /// Replaces the mutable fields, leaving `id` untouched.
    pub fn apply(&mut self, name: String, age: i64) {
        self.name = name;
        self.age = age;
    }
}

// == New Customer ==
/// Insert input for a store; the store picks the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub name: String,
    pub age: i64,
}

impl NewCustomer {
    pub fn new(name: impl Into<String>, age: i64) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    /// Builds the stored record once the store has assigned `id`.
    pub fn with_id(self, id: CustomerId) -> Customer {
        Customer {
            id,
            name: self.name,
            age: self.age,
        }
    }
}

// == Path Identifier Parsing ==
/// Parses a path segment as a customer id.
///
/// Returns `None` for anything that is not a non-negative integer.
pub fn parse_customer_id(raw: &str) -> Option<CustomerId> {
    raw.parse::<CustomerId>().ok().filter(|id| *id >= 0)
}
