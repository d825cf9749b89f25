//! Credential hashing capability.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use async_trait::async_trait;

use crate::{RentalError, RentalResult};

/// Trait for the external password hashing capability.
///
/// Plaintext passwords never reach stored state; the application hashes
/// through this trait during registration and verifies during
/// authentication.
#[async_trait]
pub trait CredentialHasher: Send + Sync {
    /// Hashes a plaintext password.
    async fn hash(&self, plaintext: &str) -> RentalResult<String>;

    /// Verifies a plaintext password against a stored hash.
    async fn verify(&self, plaintext: &str, hash: &str) -> RentalResult<bool>;
}

/// Argon2id hasher producing salted PHC strings.
#[derive(Debug, Default)]
pub struct Argon2Hasher;

#[async_trait]
impl CredentialHasher for Argon2Hasher {
    async fn hash(&self, plaintext: &str) -> RentalResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|e| RentalError::Credential(e.to_string()))?;

        Ok(hash.to_string())
    }

    async fn verify(&self, plaintext: &str, hash: &str) -> RentalResult<bool> {
        let parsed =
            PasswordHash::new(hash).map_err(|e| RentalError::Credential(e.to_string()))?;

        Ok(Argon2::default()
            .verify_password(plaintext.as_bytes(), &parsed)
            .is_ok())
    }
}
