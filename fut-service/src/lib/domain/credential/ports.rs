use async_trait::async_trait;

use crate::domain::credential::models::AuthRequest;
use crate::domain::credential::models::Credential;
use crate::domain::credential::models::NewCredential;
use crate::domain::credential::models::UserName;
use crate::credential::errors::CredentialError;

/// Port for authentication use cases.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new credential. No token is issued.
    ///
    /// # Arguments
    /// * `request` - Raw user and password
    ///
    /// # Returns
    /// Created credential
    ///
    /// # Errors
    /// * `Validation` - User or password missing
    /// * `Hashing` - Password could not be hashed
    /// * `Conflict` - User already exists
    /// * `Storage` / `Timeout` / `Cancelled` - Store failure
    async fn signup(&self, request: AuthRequest) -> Result<Credential, CredentialError>;

    /// Check a user's password and issue a signed token.
    ///
    /// # Arguments
    /// * `request` - Raw user and password
    ///
    /// # Returns
    /// Signed token string
    ///
    /// # Errors
    /// * `Validation` - User or password missing
    /// * `InvalidCredentials` - Unknown user or wrong password, indistinguishably
    /// * `Signing` - Token could not be signed
    /// * `Storage` / `Timeout` / `Cancelled` - Store failure
    async fn login(&self, request: AuthRequest) -> Result<String, CredentialError>;
}

/// Persistence operations for credentials.
///
/// Implementations must enforce user uniqueness themselves: of two
/// concurrent `create` calls for the same user exactly one succeeds.
#[async_trait]
pub trait CredentialStore: Send + Sync + 'static {
    /// Retrieve the credential of a user (exact match).
    ///
    /// # Errors
    /// * `NotFound` - No credential for this user
    /// * `Storage` / `Timeout` / `Cancelled` - Backend failure
    async fn find_by_user(&self, user: &UserName) -> Result<Credential, CredentialError>;

    /// Persist a new credential, assigning its id and timestamps.
    ///
    /// # Errors
    /// * `Conflict` - User already exists
    /// * `Storage` / `Timeout` / `Cancelled` - Backend failure
    async fn create(&self, credential: NewCredential) -> Result<Credential, CredentialError>;
}
