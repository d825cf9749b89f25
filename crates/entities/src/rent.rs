//! Rent-related entity definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A rental linking one user to one bike over an open-ended interval.
///
/// Open while `end` is unset. Closing a rent records the end time and the
/// computed amount; closed rents stay in the application's history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rent {
    /// Unique identifier.
    pub id: Uuid,
    /// Rented bike ID.
    pub bike_id: Uuid,
    /// Renting user ID.
    pub user_id: Uuid,
    /// When the rent began.
    pub start: DateTime<Utc>,
    /// When the bike was returned, if it has been.
    pub end: Option<DateTime<Utc>>,
    /// Amount charged, set when the rent is closed.
    pub amount: Option<f64>,
}

impl Rent {
    /// Creates a new open rent starting at the given time.
    pub fn new(bike_id: Uuid, user_id: Uuid, start: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            bike_id,
            user_id,
            start,
            end: None,
            amount: None,
        }
    }

    /// Returns true while the rent has not been closed.
    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }
}
