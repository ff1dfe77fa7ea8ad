use std::fmt;

use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::claims::IdentityRef;
use super::errors::TokenError;

/// Session lifetime used when nothing else is configured (24 hours).
pub const DEFAULT_TOKEN_TTL_SECONDS: i64 = 24 * 60 * 60;

/// Signing configuration handed to the token service at construction time.
#[derive(Clone)]
pub struct TokenConfig {
    secret: Vec<u8>,
    ttl_seconds: i64,
}

impl TokenConfig {
    /// # Arguments
    /// * `secret` - Process-wide signing secret (at least 32 bytes for HS256)
    /// * `ttl_seconds` - Token lifetime
    pub fn new(secret: impl AsRef<[u8]>, ttl_seconds: i64) -> Self {
        Self {
            secret: secret.as_ref().to_vec(),
            ttl_seconds,
        }
    }

    /// Configuration with the default 24 hour lifetime.
    pub fn with_default_ttl(secret: impl AsRef<[u8]>) -> Self {
        Self::new(secret, DEFAULT_TOKEN_TTL_SECONDS)
    }

    pub fn ttl_seconds(&self) -> i64 {
        self.ttl_seconds
    }
}

impl fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenConfig")
            .field("secret", &"<redacted>")
            .field("ttl_seconds", &self.ttl_seconds)
            .finish()
    }
}

/// Issues and verifies signed, time-limited session tokens.
///
/// Uses HS256 (HMAC with SHA-256). Stateless: verification only reads the
/// signing key and the clock.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    ttl_seconds: i64,
}

impl TokenService {
    pub fn new(config: &TokenConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(&config.secret),
            decoding_key: DecodingKey::from_secret(&config.secret),
            algorithm: Algorithm::HS256,
            ttl_seconds: config.ttl_seconds,
        }
    }

    /// Issue a token for `identity`, expiring one lifetime from now.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(&self, identity: &IdentityRef) -> Result<String, TokenError> {
        self.issue_at(identity, Utc::now().timestamp())
    }

    /// Issue a token as if the current time were `issued_at`.
    pub fn issue_at(&self, identity: &IdentityRef, issued_at: i64) -> Result<String, TokenError> {
        let claims = Claims::for_identity(identity, issued_at, self.ttl_seconds);

        encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Verify signature and expiry, returning the embedded identity.
    ///
    /// # Errors
    /// * `InvalidSignature` - Token was not signed with the current secret
    /// * `Malformed` - Token or payload could not be parsed
    /// * `Expired` - Current time is at or past `exp`
    pub fn verify(&self, token: &str) -> Result<IdentityRef, TokenError> {
        self.verify_at(token, Utc::now().timestamp())
    }

    /// Verify a token against an explicit clock reading (Unix seconds).
    pub fn verify_at(&self, token: &str, now: i64) -> Result<IdentityRef, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        // Expiry is checked below without leeway.
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        let claims = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::Malformed(e.to_string()),
            })?
            .claims;

        if claims.is_expired(now) {
            return Err(TokenError::Expired);
        }

        Ok(claims.identity())
    }
}
