use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::credential::models::AuthRequest;
use crate::inbound::http::router::AppState;

pub async fn create_credential(
    State(state): State<AppState>,
    body: Result<Json<CreateCredentialRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<CreateCredentialResponseData>, ApiError> {
    let Json(body) = body?;

    state
        .auth_service
        .signup(body.into())
        .await
        .map_err(ApiError::from)
        .map(|_| {
            ApiSuccess::new(
                StatusCode::OK,
                CreateCredentialResponseData {
                    message: "credentials created".to_string(),
                },
            )
        })
}

/// HTTP request body for creating credentials (raw JSON).
///
/// Missing fields decode as empty so they surface as validation errors.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct CreateCredentialRequestBody {
    #[serde(default)]
    user: String,
    #[serde(default)]
    password: String,
}

impl From<CreateCredentialRequestBody> for AuthRequest {
    fn from(body: CreateCredentialRequestBody) -> Self {
        AuthRequest::new(body.user, body.password)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateCredentialResponseData {
    pub message: String,
}
