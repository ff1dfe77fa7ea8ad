use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::token::IdentityRef;
use crate::token::TokenConfig;
use crate::token::TokenError;
use crate::token::TokenService;

/// Authentication coordinator combining password digests and session tokens.
///
/// One instance is built at startup and shared by every request handler.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_service: TokenService,
}

/// Result of successful authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticationResult {
    /// Signed session token
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("Token error: {0}")]
    TokenError(#[from] TokenError),
}

impl Authenticator {
    /// # Arguments
    /// * `token_config` - Signing secret and token lifetime
    /// * `password_hasher` - Digest implementation used for storage and verification
    pub fn new(token_config: &TokenConfig, password_hasher: PasswordHasher) -> Self {
        Self {
            password_hasher,
            token_service: TokenService::new(token_config),
        }
    }

    /// Derive a storable digest from a raw password.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Check a raw password against a stored digest.
    ///
    /// # Errors
    /// * `PasswordError` - Stored digest could not be parsed
    pub fn verify_password(&self, password: &str, stored_hash: &str) -> Result<bool, PasswordError> {
        self.password_hasher.verify(password, stored_hash)
    }

    /// Verify a password against its stored digest and issue a token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Stored digest could not be parsed
    /// * `TokenError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        identity: &IdentityRef,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !self.verify_password(password, stored_hash)? {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.token_service.issue(identity)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Issue a token without password verification.
    ///
    /// Used right after registration, when the credential was just created.
    pub fn issue_token(&self, identity: &IdentityRef) -> Result<String, TokenError> {
        self.token_service.issue(identity)
    }

    /// Validate a token and return the identity it carries.
    ///
    /// # Errors
    /// * `TokenError` - Signature invalid, payload malformed, or token expired
    pub fn validate_token(&self, token: &str) -> Result<IdentityRef, TokenError> {
        self.token_service.verify(token)
    }
}
