use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::create_user::CreateUserRequest;
use super::ApiError;
use super::ApiSuccess;
use super::SessionResponseData;
use crate::domain::auth::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<ApiSuccess<SessionResponseData>, ApiError> {
    let Json(body) = payload?;

    let session = state.auth_service.register(body.try_into_command()?).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        SessionResponseData {
            message: "Registration successful".to_string(),
            token: session.token,
        },
    ))
}
