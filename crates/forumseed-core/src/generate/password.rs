//! Password hashing for seeded accounts.
//!
//! Argon2id with a fresh OS-random salt, so seeded credentials are not
//! trivially crackable if the store leaks. The default plaintext is a fixed
//! well-known password to make local login against seeded accounts easy;
//! deployments that care should override it via `--password` or
//! `forumseed.toml`.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::{Result, SeedError};

/// Plaintext shared by every seeded account unless overridden.
pub const DEFAULT_PASSWORD: &str = "thisisastrongpassword065$";

pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| SeedError::Password {
            message: e.to_string(),
        })?;
    Ok(hash.to_string())
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    let parsed = PasswordHash::new(hash).map_err(|e| SeedError::Password {
        message: format!("invalid hash: {}", e),
    })?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
