//! Bearer token utilities for authentication
//!
//! Provides token encoding, decoding, and validation using the `jsonwebtoken` crate.
//! Tokens are long-lived and carry the holder's email as subject; there is no
//! refresh flow and no server-side session state.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::TokenConfig;
use crate::error::AppError;

/// Token claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (the user's email)
    ///
    /// Deserialized leniently so a token missing the claim decodes to an
    /// empty subject and is rejected by `subject()` rather than by serde.
    #[serde(default)]
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Get the subject email, rejecting tokens that never carried one
    ///
    /// # Errors
    /// Returns `AppError::MissingClaim` if the subject is absent or empty
    pub fn subject(&self) -> Result<&str, AppError> {
        if self.sub.is_empty() {
            return Err(AppError::MissingClaim);
        }
        Ok(&self.sub)
    }

    /// Check if the token is expired
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

/// Token service for encoding and decoding bearer tokens
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiry_days: i64,
}

impl TokenService {
    /// Create a new token service from configuration
    #[must_use]
    pub fn new(config: &TokenConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            expiry_days: config.expiry_days,
        }
    }

    /// Issue a token for the given email
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn issue(&self, email: &str) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: email.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::days(self.expiry_days)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("Failed to encode token")))
    }

    /// Decode and validate a token
    ///
    /// Expired and malformed tokens are indistinguishable to the caller.
    ///
    /// # Errors
    /// Returns `AppError::InvalidToken` if the token fails validation
    pub fn decode(&self, token: &str) -> Result<Claims, AppError> {
        let validation = Validation::default();

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|_| AppError::InvalidToken)?;

        Ok(token_data.claims)
    }
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("expiry_days", &self.expiry_days)
            .finish_non_exhaustive()
    }
}
