use serde::Deserialize;
use serde::Serialize;

/// Identity reference carried inside a session token.
///
/// Holds just enough to identify the caller on subsequent requests
/// without a store round-trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityRef {
    /// Opaque identity identifier
    pub id: String,
    /// Human-readable handle
    pub username: String,
}

impl IdentityRef {
    pub fn new(id: impl ToString, username: impl ToString) -> Self {
        Self {
            id: id.to_string(),
            username: username.to_string(),
        }
    }
}

/// Session token payload.
///
/// Timestamps are Unix seconds. `exp` is always `iat` plus the configured lifetime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (identity identifier)
    pub sub: String,

    /// Identity handle
    pub username: String,

    /// Issued at
    pub iat: i64,

    /// Expiration time
    pub exp: i64,
}

impl Claims {
    /// Build claims for an identity issued at `issued_at`.
    ///
    /// # Arguments
    /// * `identity` - Identity to embed
    /// * `issued_at` - Issuance time (Unix timestamp)
    /// * `ttl_seconds` - Lifetime of the token
    pub fn for_identity(identity: &IdentityRef, issued_at: i64, ttl_seconds: i64) -> Self {
        Self {
            sub: identity.id.clone(),
            username: identity.username.clone(),
            iat: issued_at,
            exp: issued_at.saturating_add(ttl_seconds),
        }
    }

    /// A token is expired from the exact second of `exp` onwards.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        current_timestamp >= self.exp
    }

    /// Identity reference embedded in the claims.
    pub fn identity(&self) -> IdentityRef {
        IdentityRef {
            id: self.sub.clone(),
            username: self.username.clone(),
        }
    }
}
