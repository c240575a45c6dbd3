//! JWT Token Codec
//! Mission: Sign and verify the gateway's role-bearing tokens

use crate::auth::models::Claims;
use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation,
};

/// Verification failure, split along the only two lines callers care about.
#[derive(Debug, PartialEq, Eq)]
pub enum TokenError {
    /// Signature mismatch or a token that is not a well-formed JWT.
    InvalidSignature,
    /// Signature checked out but the expiration has passed.
    Expired,
}

impl std::fmt::Display for TokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenError::InvalidSignature => write!(f, "Invalid token signature"),
            TokenError::Expired => write!(f, "Token expired"),
        }
    }
}

impl std::error::Error for TokenError {}

/// Codec bound to one signing secret. The gateway holds two of these:
/// one for access tokens, one for refresh tokens. A token signed by one
/// never verifies under the other.
#[derive(Debug, Clone)]
pub struct TokenCodec {
    secret: String,
}

impl TokenCodec {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Sign a token carrying `role`, expiring `ttl` from now.
    pub fn sign(&self, role: &str, ttl: Duration) -> Result<String> {
        let now = Utc::now();
        let expiration = now
            .checked_add_signed(ttl)
            .context("Invalid timestamp")?
            .timestamp();

        let claims = Claims {
            role: role.to_string(),
            iat: now.timestamp(),
            exp: expiration,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .context("Failed to sign token")
    }

    /// Verify a token and return its claims. Expiry is checked with zero
    /// leeway so a token is rejected the instant its `exp` passes.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::default();
        validation.leeway = 0;

        let decoded = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::InvalidSignature,
        })?;

        Ok(decoded.claims)
    }
}
