//! VeloRent demo binary.
//!
//! Walks the rental lifecycle end to end over a manual clock: register a
//! user and a bike, rent, advance virtual time, return, relocate.
//! Illustrative only; the tested contract lives in the `rental` crate.

use std::sync::Arc;

use chrono::Duration;
use entities::{Bike, Location, User};
use rental::{App, Argon2Hasher, ManualClock};

mod config;

use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env if present
    dotenvy::dotenv().ok();

    let config = Config::from_env();
    init_tracing(&config.log_level);

    // Manual clock so the demo advances time instead of sleeping
    let clock = Arc::new(ManualClock::default());
    let mut app = App::with_capabilities(clock.clone(), Arc::new(Argon2Hasher));

    app.register_user(User::new("Jose", "jose@mail.com", "1234"))
        .await?;

    let bike = Bike::new("caloi mountainbike", "mountain bike", 1234, 1234, 100.0)
        .with_description("My bike")
        .with_ratings(5);
    let bike_id = app.register_bike(Some(bike))?;
    tracing::info!(
        available = app.find_bike(bike_id)?.available,
        "bike registered"
    );

    app.rent_bike(bike_id, "jose@mail.com")?;
    tracing::info!(available = app.find_bike(bike_id)?.available, "bike rented");

    clock.advance(Duration::minutes(65));

    let amount = app.return_bike(bike_id, "jose@mail.com")?;
    tracing::info!(
        amount,
        available = app.find_bike(bike_id)?.available,
        "bike returned"
    );

    app.move_bike_to(bike_id, Location::new(40.753056, -73.983056))?;
    let location = app.find_bike(bike_id)?.location;
    tracing::info!(
        latitude = location.latitude,
        longitude = location.longitude,
        "bike relocated"
    );

    Ok(())
}

/// Initializes tracing with the given log level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
