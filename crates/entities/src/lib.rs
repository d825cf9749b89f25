//! Core entity definitions for VeloRent.
//!
//! This crate defines the plain data types used across the rental
//! application: users, bikes, rents, and geographic locations. Entities
//! carry no orchestration logic; the `rental` crate owns and mutates them.

mod bike;
mod location;
mod rent;
mod user;

pub use bike::*;
pub use location::*;
pub use rent::*;
pub use user::*;
