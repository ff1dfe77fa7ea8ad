use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::User;

/// Registration carries exactly what user creation needs.
pub type RegisterCommand = CreateUserCommand;

/// Login credentials as submitted; the email is not pre-validated so that a
/// malformed address fails exactly like an unknown one.
#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

impl LoginCommand {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// A freshly authenticated user together with its session token.
#[derive(Debug, Clone)]
pub struct Session {
    pub user: User,
    pub token: String,
}
