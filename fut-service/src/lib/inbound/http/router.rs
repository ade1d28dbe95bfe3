use std::any::Any;
use std::sync::Arc;
use std::time::Duration;

use auth::TokenVerifier;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::http::StatusCode;
use axum::middleware;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::routing::post;
use axum::Json;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_credential::create_credential;
use super::handlers::ApiErrorBody;
use super::handlers::list_competitions::list_competitions;
use super::handlers::login::login;
use super::middleware::authenticate as auth_middleware;
use crate::competition::ports::CompetitionProvider;
use crate::credential::ports::AuthServicePort;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthServicePort>,
    pub token_verifier: Arc<TokenVerifier>,
    pub competitions: Arc<dyn CompetitionProvider>,
}

pub fn create_router(
    auth_service: Arc<dyn AuthServicePort>,
    token_verifier: Arc<TokenVerifier>,
    competitions: Arc<dyn CompetitionProvider>,
) -> Router {
    let state = AppState {
        auth_service,
        token_verifier,
        competitions,
    };

    let public_routes = Router::new()
        .route("/auth/create", post(create_credential))
        .route("/auth/login", post(login));

    let protected_routes = Router::new()
        .route("/campeonatos", get(list_competitions))
        .route("/campeonatos/", get(list_competitions))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    // Headers are left out of spans so bearer tokens never reach the logs.
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(panic = %detail, "Request handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiErrorBody {
            error: "internal server error".to_string(),
        }),
    )
        .into_response()
}
