use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::user::errors::EmailError;
use crate::user::errors::PasswordError;
use crate::user::errors::UserIdError;
use crate::user::errors::UsernameError;

/// User aggregate entity.
///
/// `password_hash` is only ever produced by the service from a validated
/// [`PasswordCandidate`]; it never comes from request input.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub email: EmailAddress,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random user ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a user ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        Uuid::parse_str(s)
            .map(UserId)
            .map_err(|e| UserIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Username value type
///
/// Any non-blank handle up to 64 characters; surrounding whitespace is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    const MAX_LENGTH: usize = 64;

    /// Create a new valid username.
    ///
    /// # Errors
    /// * `Required` - Username is empty or only whitespace
    /// * `TooLong` - Username longer than 64 characters
    pub fn new(username: String) -> Result<Self, UsernameError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(UsernameError::Required);
        }

        let length = username.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(UsernameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        Ok(Self(username.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Raw password and its confirmation as submitted by a client.
///
/// Exists only in memory; [`PasswordCandidate::validate`] must succeed before
/// a digest is derived from it.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct PasswordCandidate {
    password: Option<String>,
    confirmation: Option<String>,
}

impl PasswordCandidate {
    pub fn new(password: Option<String>, confirmation: Option<String>) -> Self {
        Self {
            password,
            confirmation,
        }
    }

    /// Candidate whose confirmation is the password itself.
    pub fn confirmed(password: impl Into<String>) -> Self {
        let password = password.into();
        Self {
            confirmation: Some(password.clone()),
            password: Some(password),
        }
    }

    /// Check presence and confirmation, yielding the raw password.
    ///
    /// # Errors
    /// * `Missing` - No password, or an empty one
    /// * `ConfirmationMismatch` - Confirmation absent or different
    pub fn validate(self) -> Result<String, PasswordError> {
        let password = match self.password {
            Some(password) if !password.is_empty() => password,
            _ => return Err(PasswordError::Missing),
        };

        match self.confirmation {
            Some(confirmation) if confirmation == password => Ok(password),
            _ => Err(PasswordError::ConfirmationMismatch),
        }
    }
}

impl fmt::Debug for PasswordCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordCandidate")
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field(
                "confirmation",
                &self.confirmation.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

/// Command to create a new user with domain types
#[derive(Debug)]
pub struct CreateUserCommand {
    pub username: Username,
    pub email: EmailAddress,
    pub password: PasswordCandidate,
}

impl CreateUserCommand {
    pub fn new(username: Username, email: EmailAddress, password: PasswordCandidate) -> Self {
        Self {
            username,
            email,
            password,
        }
    }
}

/// Command to update an existing user with optional validated fields.
///
/// All fields are optional to support partial updates. A supplied password is
/// validated exactly like at creation and replaces the stored digest.
#[derive(Debug, Default)]
pub struct UpdateUserCommand {
    pub username: Option<Username>,
    pub email: Option<EmailAddress>,
    pub password: Option<PasswordCandidate>,
}
