use async_trait::async_trait;

use crate::competition::errors::CompetitionError;
use crate::domain::competition::models::CompetitionResponse;

/// Source of competition listings.
#[async_trait]
pub trait CompetitionProvider: Send + Sync + 'static {
    /// Fetch every competition the provider exposes.
    ///
    /// # Errors
    /// * `Request` - Provider unreachable or timed out
    /// * `Upstream` - Provider answered with a non-success status
    /// * `Decode` - Provider body is not a competition listing
    async fn competition_list(&self) -> Result<CompetitionResponse, CompetitionError>;
}
