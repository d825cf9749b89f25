//! User-related entity definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user of the rental service.
///
/// The plaintext password captured at construction is hashed by the
/// application during registration; the entity only carries a settable
/// hash slot because hashing is an external capability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Email address (unique lookup key).
    pub email: String,
    /// Plaintext password as supplied at construction.
    pub password: String,
    /// Password hash, set during registration.
    pub password_hash: Option<String>,
    /// When this record was created.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new user.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            password: password.into(),
            password_hash: None,
            created_at: Utc::now(),
        }
    }
}
