//! Admin access gate.
//!
//! The shared admin secret is stored as a bcrypt hash (`$2b$...`, salt and
//! cost embedded); verification goes through `bcrypt::verify`.

use crate::config::Config;
use crate::errors::{AppError, AppResult};

/// Hash a new admin secret with a fresh random salt.
pub fn hash_secret(secret: &str) -> AppResult<String> {
    if secret.trim().is_empty() {
        return Err(AppError::Config("admin secret must not be empty".into()));
    }

    bcrypt::hash(secret, bcrypt::DEFAULT_COST)
        .map_err(|e| AppError::Config(format!("failed to hash admin secret: {e}")))
}

/// Check `candidate` against a value produced by [`hash_secret`].
pub fn verify_secret(candidate: &str, stored: &str) -> AppResult<bool> {
    bcrypt::verify(candidate, stored.trim()).map_err(|_| AppError::MalformedSecretHash)
}

/// Gate for every admin command.
pub fn authorize(cfg: &Config, provided: Option<&str>) -> AppResult<()> {
    let stored = cfg
        .admin_secret_hash
        .as_deref()
        .ok_or(AppError::AdminSecretNotSet)?;

    let candidate = provided.ok_or(AppError::MissingSecret)?;

    if verify_secret(candidate, stored)? {
        Ok(())
    } else {
        Err(AppError::Unauthorized)
    }
}
