use axum::extract::Request;
use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;

use crate::inbound::http::router::AppState;

/// Extension type carrying the verified caller through the request
#[derive(Debug, Clone)]
pub struct AuthenticatedCredential {
    pub user: String,
    pub id: Option<String>,
    pub claims: auth::Claims,
}

impl From<auth::Claims> for AuthenticatedCredential {
    fn from(claims: auth::Claims) -> Self {
        Self {
            user: claims.sub.clone(),
            id: claims.id.clone(),
            claims,
        }
    }
}

/// Middleware that verifies the bearer token and adds the caller to request
/// extensions.
///
/// Every rejection gets the same 401 body; only the log records why.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    // A header that is not visible ASCII is treated like a missing one.
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let claims = state.token_verifier.verify_header(header).map_err(|e| {
        tracing::warn!(kind = e.kind(), error = %e, "Request rejected by auth gate");
        unauthorized()
    })?;

    req.extensions_mut()
        .insert(AuthenticatedCredential::from(claims));

    Ok(next.run(req).await)
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({
            "error": "unauthorized"
        })),
    )
        .into_response()
}
