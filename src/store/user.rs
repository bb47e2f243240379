//! The user record type.

use serde::{Deserialize, Serialize};

/// A stored user record.
///
/// `name` is the only attribute and is immutable once the record has been
/// created; there is no update operation. The JSON shape is
/// `{"name": string}` on both the request and response side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
}

impl User {
    /// Create a user record with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
