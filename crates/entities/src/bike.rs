//! Bike-related entity definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Location;

/// A rentable bike.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bike {
    /// Unique identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Brand or category label.
    pub brand: String,
    /// Manufacturing year.
    pub year: i32,
    /// Model number.
    pub model: i32,
    /// Rental cost per hour.
    pub rate: f64,
    /// Free-form description.
    pub description: String,
    /// Aggregate rating.
    pub ratings: u32,
    /// Asset URLs (photos and the like).
    pub assets: Vec<String>,
    /// Whether the bike can be rented right now.
    pub available: bool,
    /// Current location.
    pub location: Location,
    /// When this record was created.
    pub created_at: DateTime<Utc>,
}

impl Bike {
    /// Creates a new bike, available and located at the origin.
    pub fn new(
        name: impl Into<String>,
        brand: impl Into<String>,
        year: i32,
        model: i32,
        rate: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            brand: brand.into(),
            year,
            model,
            rate,
            description: String::new(),
            ratings: 0,
            assets: Vec::new(),
            available: true,
            location: Location::default(),
            created_at: Utc::now(),
        }
    }

    /// Sets the description for this bike.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the aggregate rating for this bike.
    pub fn with_ratings(mut self, ratings: u32) -> Self {
        self.ratings = ratings;
        self
    }

    /// Sets the asset URLs for this bike.
    pub fn with_assets(mut self, assets: Vec<String>) -> Self {
        self.assets = assets;
        self
    }
}
