use thiserror::Error;

/// Error for request validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("user is required")]
    UserRequired,

    #[error("password is required")]
    PasswordRequired,
}

/// Top-level error for all credential operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CredentialError {
    #[error("Invalid request: {0}")]
    Validation(#[from] ValidationError),

    #[error("Password hashing failed: {0}")]
    Hashing(String),

    /// Unknown user and wrong password both end up here.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Credential not found for user: {0}")]
    NotFound(String),

    #[error("User already exists: {0}")]
    Conflict(String),

    // Infrastructure errors
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Storage operation timed out")]
    Timeout,

    #[error("Storage operation cancelled")]
    Cancelled,

    #[error("Token signing failed: {0}")]
    Signing(String),
}

impl From<auth::PasswordError> for CredentialError {
    fn from(err: auth::PasswordError) -> Self {
        CredentialError::Hashing(err.to_string())
    }
}

impl From<auth::TokenError> for CredentialError {
    fn from(err: auth::TokenError) -> Self {
        CredentialError::Signing(err.to_string())
    }
}
