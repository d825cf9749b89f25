//! Geographic location value type.

use serde::{Deserialize, Serialize};

/// A coordinate pair in decimal degrees.
///
/// Immutable once constructed; moving a bike replaces its location with a
/// new instance.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Location {
    /// Latitude.
    pub latitude: f64,
    /// Longitude.
    pub longitude: f64,
}

impl Location {
    /// Creates a new location.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}
