//! Authentication utilities library
//!
//! - Password digests (Argon2id) with tunable cost
//! - Signed, time-limited session tokens (HS256)
//! - An `Authenticator` coordinating both
//!
//! Services define their own ports and adapt these implementations.
//!
//! # Examples
//!
//! ```
//! use auth::{Authenticator, IdentityRef, PasswordHasher, TokenConfig};
//!
//! let auth = Authenticator::new(
//!     &TokenConfig::with_default_ttl(b"secret_key_at_least_32_bytes_long!"),
//!     PasswordHasher::new(),
//! );
//!
//! // Register: derive the digest
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue a token
//! let identity = IdentityRef::new("user123", "alice");
//! let result = auth.authenticate("password123", &hash, &identity).unwrap();
//!
//! // Gate: validate the token
//! let decoded = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(decoded, identity);
//! ```

pub mod authenticator;
pub mod password;
pub mod token;

pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use password::HashingParams;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::IdentityRef;
pub use token::TokenConfig;
pub use token::TokenError;
pub use token::TokenService;
pub use token::DEFAULT_TOKEN_TTL_SECONDS;
