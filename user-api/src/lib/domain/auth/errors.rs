use auth::TokenError;
use thiserror::Error;

use crate::user::errors::UserError;

/// Errors of the registration and login flows.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// Unknown email or wrong password; deliberately does not say which.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Validation or store failure raised while creating or looking up a user.
    #[error(transparent)]
    User(#[from] UserError),

    #[error("Password verification failed: {0}")]
    PasswordVerification(String),

    #[error("Token generation failed: {0}")]
    Token(#[from] TokenError),
}
