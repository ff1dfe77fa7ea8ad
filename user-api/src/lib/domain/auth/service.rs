use std::sync::Arc;

use async_trait::async_trait;
use auth::IdentityRef;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::models::RegisterCommand;
use crate::domain::auth::models::Session;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::auth::ports::CredentialsPort;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::user::ports::UserServicePort;

/// Plaintext behind the digest checked when a login matches no user.
const UNKNOWN_USER_PASSWORD: &str = "unknown-user-placeholder";

/// Registration and login on top of the user service.
pub struct AuthService<US, C>
where
    US: UserServicePort,
    C: CredentialsPort,
{
    users: Arc<US>,
    credentials: Arc<C>,
    unknown_user_digest: String,
}

impl<US, C> AuthService<US, C>
where
    US: UserServicePort,
    C: CredentialsPort,
{
    /// # Errors
    /// * `PasswordVerification` - The placeholder digest could not be derived
    pub fn new(users: Arc<US>, credentials: Arc<C>) -> Result<Self, AuthError> {
        let unknown_user_digest = credentials
            .hash_password(UNKNOWN_USER_PASSWORD)
            .map_err(|e| AuthError::PasswordVerification(e.to_string()))?;

        Ok(Self {
            users,
            credentials,
            unknown_user_digest,
        })
    }

    async fn verify_password(&self, password: String, digest: String) -> Result<bool, AuthError> {
        let credentials = Arc::clone(&self.credentials);

        tokio::task::spawn_blocking(move || credentials.verify_password(&password, &digest))
            .await
            .map_err(|e| AuthError::PasswordVerification(e.to_string()))?
            .map_err(|e| AuthError::PasswordVerification(e.to_string()))
    }
}

fn identity_of(user: &User) -> IdentityRef {
    IdentityRef::new(user.id, user.username.as_str())
}

#[async_trait]
impl<US, C> AuthServicePort for AuthService<US, C>
where
    US: UserServicePort,
    C: CredentialsPort,
{
    async fn register(&self, command: RegisterCommand) -> Result<Session, AuthError> {
        let user = self.users.create_user(command).await?;
        let token = self.credentials.issue_token(&identity_of(&user))?;

        Ok(Session { user, token })
    }

    async fn login(&self, command: LoginCommand) -> Result<Session, AuthError> {
        // A store failure propagates as-is; only a definite miss is InvalidCredentials
        let user = match EmailAddress::new(command.email) {
            Ok(email) => self.users.find_user_by_email(&email).await?,
            Err(_) => None,
        };

        let Some(user) = user else {
            // A miss pays for one Argon2 verification, like a wrong password does
            if let Err(e) = self
                .verify_password(command.password, self.unknown_user_digest.clone())
                .await
            {
                tracing::warn!(error = %e, "Placeholder password verification failed");
            }
            return Err(AuthError::InvalidCredentials);
        };

        if !self
            .verify_password(command.password, user.password_hash.clone())
            .await?
        {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.credentials.issue_token(&identity_of(&user))?;
        tracing::info!(user_id = %user.id, "User logged in");

        Ok(Session { user, token })
    }
}
