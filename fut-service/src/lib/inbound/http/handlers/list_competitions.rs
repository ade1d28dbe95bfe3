use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::competition::models::format_competitions;
use crate::domain::competition::models::FormattedCompetition;
use crate::inbound::http::middleware::AuthenticatedCredential;
use crate::inbound::http::router::AppState;

pub async fn list_competitions(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedCredential>,
) -> Result<ApiSuccess<Vec<FormattedCompetition>>, ApiError> {
    tracing::debug!(user = %caller.user, "Listing competitions");

    let response = state.competitions.competition_list().await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        format_competitions(&response),
    ))
}
