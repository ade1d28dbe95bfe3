use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::competition::errors::CompetitionError;
use crate::competition::ports::CompetitionProvider;
use crate::config::FootballConfig;
use crate::domain::competition::models::CompetitionResponse;

const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";

/// HTTP client for the football-data.org v4 API
#[derive(Clone)]
pub struct FootballDataClient {
    client: reqwest::Client,
    base_url: Arc<str>,
    api_token: Option<Arc<str>>,
}

impl FootballDataClient {
    /// Build a client with a bounded per-request timeout.
    ///
    /// # Errors
    /// * `Request` - HTTP client could not be initialized
    pub fn new(
        base_url: &str,
        api_token: Option<&str>,
        timeout: Duration,
    ) -> Result<Self, CompetitionError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CompetitionError::Request(e.to_string()))?;

        Ok(Self {
            client,
            base_url: Arc::from(base_url.trim_end_matches('/')),
            api_token: api_token.filter(|t| !t.is_empty()).map(Arc::from),
        })
    }

    pub fn from_config(config: &FootballConfig) -> Result<Self, CompetitionError> {
        Self::new(
            &config.base_url,
            config.api_token.as_deref(),
            config.timeout(),
        )
    }
}

#[async_trait]
impl CompetitionProvider for FootballDataClient {
    #[tracing::instrument(skip(self))]
    async fn competition_list(&self) -> Result<CompetitionResponse, CompetitionError> {
        let url = format!("{}/v4/competitions", self.base_url);

        let mut request = self.client.get(&url);
        if let Some(token) = &self.api_token {
            request = request.header(AUTH_TOKEN_HEADER, token.as_ref());
        }

        let response = request
            .send()
            .await
            .map_err(|e| CompetitionError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Competition listing rejected upstream");
            return Err(CompetitionError::Upstream(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| CompetitionError::Request(e.to_string()))?;

        serde_json::from_slice(&body).map_err(|e| CompetitionError::Decode(e.to_string()))
    }
}
