use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::competition::errors::CompetitionError;
use crate::credential::errors::CredentialError;

pub mod create_credential;
pub mod list_competitions;
pub mod login;

const INTERNAL_ERROR_MESSAGE: &str = "internal server error";
const INVALID_JSON_MESSAGE: &str = "Invalid JSON";

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<T>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    BadRequest(String),
    Unauthorized(String),
    Conflict(String),
    BadGateway(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::BadGateway(msg) => (StatusCode::BAD_GATEWAY, msg),
        };

        (status, Json(ApiErrorBody { error: message })).into_response()
    }
}

impl From<CredentialError> for ApiError {
    fn from(err: CredentialError) -> Self {
        match err {
            CredentialError::Validation(e) => ApiError::BadRequest(e.to_string()),
            CredentialError::InvalidCredentials | CredentialError::NotFound(_) => {
                ApiError::Unauthorized("invalid credentials".to_string())
            }
            CredentialError::Conflict(_) => ApiError::Conflict("user already exists".to_string()),
            CredentialError::Hashing(_)
            | CredentialError::Storage(_)
            | CredentialError::Timeout
            | CredentialError::Cancelled
            | CredentialError::Signing(_) => {
                tracing::error!(error = %err, "Credential operation failed");
                ApiError::InternalServerError(INTERNAL_ERROR_MESSAGE.to_string())
            }
        }
    }
}

impl From<CompetitionError> for ApiError {
    fn from(err: CompetitionError) -> Self {
        tracing::error!(error = %err, "Competition listing failed");
        ApiError::BadGateway("failed to fetch competitions".to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!(error = %rejection.body_text(), "Request body rejected");
        ApiError::BadRequest(INVALID_JSON_MESSAGE.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorBody {
    pub error: String,
}
