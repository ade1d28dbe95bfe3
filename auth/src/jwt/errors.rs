use thiserror::Error;

/// Error type for token issuance and verification.
///
/// Every verification variant corresponds to the stage that rejected the
/// token. The variants are meant for logs only: callers answering a client
/// should collapse them into a single "unauthorized" response.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Authorization header is missing or not of the form 'Bearer <token>'")]
    MalformedAuthHeader,

    #[error("Token signing algorithm is not accepted: {0}")]
    UnsupportedAlgorithm(String),

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token claims are malformed: {0}")]
    MalformedClaims(String),

    #[error("Token is expired")]
    Expired,

    #[error("Failed to sign token: {0}")]
    Signing(String),
}

impl TokenError {
    /// Short stable label, suitable as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            TokenError::MalformedAuthHeader => "malformed_auth_header",
            TokenError::UnsupportedAlgorithm(_) => "unsupported_algorithm",
            TokenError::InvalidSignature => "invalid_signature",
            TokenError::MalformedClaims(_) => "malformed_claims",
            TokenError::Expired => "expired",
            TokenError::Signing(_) => "signing",
        }
    }
}
