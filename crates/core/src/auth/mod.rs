//! Account credentials.
//!
//! This module provides:
//! - Password hashing with Argon2id
//! - Password verification
//! - Registration input checks

mod password;

pub use password::{PasswordError, hash_password, verify_password};

use crate::company::CompanyError;
use crate::company::service::validate_email;

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Validates the credentials supplied at registration.
///
/// # Errors
///
/// Returns `PasswordError::TooShort` for short passwords and
/// `PasswordError::InvalidEmail` for malformed emails.
pub fn validate_credentials(email: &str, password: &str) -> Result<(), PasswordError> {
    validate_email(email).map_err(|e| match e {
        CompanyError::InvalidEmail(email) => PasswordError::InvalidEmail(email),
        other => PasswordError::InvalidEmail(other.to_string()),
    })?;

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(PasswordError::TooShort {
            min: MIN_PASSWORD_LENGTH,
        });
    }

    Ok(())
}

/// Normalizes an email for storage and lookup.
#[must_use]
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
