//! Rental orchestration for VeloRent.
//!
//! This crate provides the in-memory application layer: the [`App`]
//! orchestrator that owns every registered user and bike plus the rent
//! history, and the injected capabilities it runs on (a [`Clock`] time
//! source and a [`CredentialHasher`] for passwords). State lives in
//! process memory for the lifetime of the `App` instance.

mod app;
mod clock;
mod credentials;
mod error;

pub use app::*;
pub use clock::*;
pub use credentials::*;
pub use error::*;
