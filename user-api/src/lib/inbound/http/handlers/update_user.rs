use axum::extract::rejection::JsonRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::UserResponse;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::PasswordCandidate;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;
use crate::user::ports::UserServicePort;

/// HTTP request body for updating a user (raw JSON, every field optional)
#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub password_confirmation: Option<String>,
}

impl UpdateUserRequest {
    fn try_into_command(self) -> Result<UpdateUserCommand, UserError> {
        let username = self.username.map(Username::new).transpose()?;
        let email = self.email.map(EmailAddress::new).transpose()?;

        // Either half of the pair triggers the full creation-time check
        let password = match (self.password, self.password_confirmation) {
            (None, None) => None,
            (password, confirmation) => Some(PasswordCandidate::new(password, confirmation)),
        };

        Ok(UpdateUserCommand {
            username,
            email,
            password,
        })
    }
}

/// Serves both PUT and PATCH; both are partial updates.
pub async fn update_user(
    State(state): State<AppState>,
    Extension(actor): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> Result<ApiSuccess<UserResponse>, ApiError> {
    let user_id = UserId::from_string(&id).map_err(UserError::from)?;
    let Json(req) = payload?;
    let command = req.try_into_command()?;

    let user = state.user_service.update_user(&user_id, command).await?;
    tracing::info!(actor = %actor.user_id, user_id = %user.id, "User modified");

    Ok(ApiSuccess::new(StatusCode::OK, (&user).into()))
}
