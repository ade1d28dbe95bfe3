use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::credential::models::AuthRequest;
use crate::inbound::http::router::AppState;

/// Exchange a user and password for a signed token.
///
/// The token is the whole response body, as a JSON string.
pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<String>, ApiError> {
    let Json(body) = body?;

    state
        .auth_service
        .login(body.into())
        .await
        .map_err(ApiError::from)
        .map(|token| ApiSuccess::new(StatusCode::OK, token))
}

#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    #[serde(default)]
    user: String,
    #[serde(default)]
    password: String,
}

impl From<LoginRequestBody> for AuthRequest {
    fn from(body: LoginRequestBody) -> Self {
        AuthRequest::new(body.user, body.password)
    }
}
