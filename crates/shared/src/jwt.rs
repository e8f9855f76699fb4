//! Session tokens for authenticated requests.
//!
//! A session token is an HS256 JWT carrying [`Claims`]. Tokens are not stored
//! server-side; revoking access is done by suspending the account.

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use thiserror::Error;
use uuid::Uuid;

use crate::auth::{Claims, UserRole};
use crate::config::JwtSettings;

/// Longest accepted token lifetime (one year).
const MAX_TTL_SECS: u64 = 365 * 24 * 3600;

/// Why a token could not be issued or accepted.
#[derive(Debug, Error)]
pub enum JwtError {
    /// Signing failed.
    #[error("could not sign session token: {0}")]
    Sign(String),

    /// Signature, format or claims are wrong.
    #[error("session token rejected: {0}")]
    Rejected(String),

    /// Past its `exp` claim.
    #[error("session token has expired")]
    Expired,
}

/// Issues and verifies session tokens with a shared secret.
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("ttl_secs", &self.ttl.num_seconds())
            .finish_non_exhaustive()
    }
}

impl JwtService {
    /// Creates a service signing with `secret`; tokens live for `ttl_secs`.
    #[must_use]
    pub fn new(secret: &str, ttl_secs: u64) -> Self {
        let ttl = Duration::seconds(i64::try_from(ttl_secs.min(MAX_TTL_SECS)).unwrap_or(0));

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl,
        }
    }

    /// Creates a service from the `[jwt]` config section.
    #[must_use]
    pub fn from_settings(settings: &JwtSettings) -> Self {
        Self::new(&settings.secret, settings.access_token_expiry_secs)
    }

    /// Signs a token for a user of a company.
    ///
    /// # Errors
    ///
    /// Returns `JwtError::Sign` if the claims cannot be encoded.
    pub fn issue(&self, user_id: Uuid, company_id: Uuid, role: UserRole) -> Result<String, JwtError> {
        let expires_at = Utc::now() + self.ttl;
        let claims = Claims::new(user_id, company_id, role, expires_at);

        encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| JwtError::Sign(e.to_string()))
    }

    /// Checks the signature and expiry of a token and returns its claims.
    ///
    /// # Errors
    ///
    /// Returns `JwtError::Expired` for an expired token and
    /// `JwtError::Rejected` for anything malformed or forged.
    pub fn verify(&self, token: &str) -> Result<Claims, JwtError> {
        match decode::<Claims>(token, &self.decoding_key, &self.validation) {
            Ok(data) => Ok(data.claims),
            Err(e) if matches!(e.kind(), ErrorKind::ExpiredSignature) => Err(JwtError::Expired),
            Err(e) => Err(JwtError::Rejected(e.to_string())),
        }
    }

    /// Token lifetime in seconds, as reported to clients.
    #[must_use]
    pub fn ttl_secs(&self) -> i64 {
        self.ttl.num_seconds()
    }
}
