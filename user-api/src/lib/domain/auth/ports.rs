use async_trait::async_trait;
use auth::Authenticator;
use auth::IdentityRef;
use auth::PasswordError;
use auth::TokenError;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::models::RegisterCommand;
use crate::domain::auth::models::Session;

/// Port for the registration and login flows.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Create a user, then issue a session token for it.
    ///
    /// # Errors
    /// * `User` - Validation failure (password rules, duplicates) or store failure
    /// * `Token` - Token generation failed after the user was persisted
    async fn register(&self, command: RegisterCommand) -> Result<Session, AuthError>;

    /// Verify email and password, then issue a session token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password
    /// * `User` - Store failure during lookup
    /// * `PasswordVerification` - Stored digest is unusable
    /// * `Token` - Token generation failed
    async fn login(&self, command: LoginCommand) -> Result<Session, AuthError>;
}

/// Password digests and session tokens as seen by the login flow.
///
/// Methods are blocking; Argon2 work belongs on a blocking thread.
pub trait CredentialsPort: Send + Sync + 'static {
    fn hash_password(&self, password: &str) -> Result<String, PasswordError>;

    fn verify_password(&self, password: &str, digest: &str) -> Result<bool, PasswordError>;

    fn issue_token(&self, identity: &IdentityRef) -> Result<String, TokenError>;
}

impl CredentialsPort for Authenticator {
    fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        Authenticator::hash_password(self, password)
    }

    fn verify_password(&self, password: &str, digest: &str) -> Result<bool, PasswordError> {
        Authenticator::verify_password(self, password, digest)
    }

    fn issue_token(&self, identity: &IdentityRef) -> Result<String, TokenError> {
        Authenticator::issue_token(self, identity)
    }
}
