use thiserror::Error;

/// Errors from the upstream sports-data provider
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CompetitionError {
    #[error("Upstream request failed: {0}")]
    Request(String),

    #[error("Upstream responded with status {0}")]
    Upstream(u16),

    #[error("Upstream response could not be decoded: {0}")]
    Decode(String),
}
