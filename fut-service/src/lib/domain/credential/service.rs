use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use auth::PasswordHasher;
use auth::TokenIssuer;
use tokio_util::sync::CancellationToken;

use crate::domain::credential::models::AuthRequest;
use crate::domain::credential::models::Credential;
use crate::domain::credential::models::NewCredential;
use crate::domain::credential::models::Password;
use crate::domain::credential::models::PasswordHash;
use crate::credential::errors::CredentialError;
use crate::credential::ports::AuthServicePort;
use crate::credential::ports::CredentialStore;

const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(3);

/// Argon2id hash with the hasher's default parameters. Verified against when
/// the user is unknown so both rejection paths cost one full verification.
const DUMMY_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHRzb21lc2FsdA$AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

/// Domain service implementation for login and signup.
///
/// Every store call is bounded by the store timeout and by the shutdown
/// token. Password hashing runs on the blocking pool.
pub struct AuthService<CS>
where
    CS: CredentialStore,
{
    store: Arc<CS>,
    password_hasher: PasswordHasher,
    token_issuer: TokenIssuer,
    store_timeout: Duration,
    shutdown: CancellationToken,
}

impl<CS> AuthService<CS>
where
    CS: CredentialStore,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `store` - Credential persistence implementation
    /// * `token_issuer` - Signs tokens for successful logins
    ///
    /// # Returns
    /// Configured auth service instance
    pub fn new(store: Arc<CS>, token_issuer: TokenIssuer) -> Self {
        Self {
            store,
            password_hasher: PasswordHasher::new(),
            token_issuer,
            store_timeout: DEFAULT_STORE_TIMEOUT,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_store_timeout(mut self, timeout: Duration) -> Self {
        self.store_timeout = timeout;
        self
    }

    /// Abort pending store calls with `Cancelled` once `shutdown` fires.
    pub fn with_cancellation(mut self, shutdown: CancellationToken) -> Self {
        self.shutdown = shutdown;
        self
    }

    async fn bounded<T, F>(&self, operation: F) -> Result<T, CredentialError>
    where
        F: Future<Output = Result<T, CredentialError>>,
    {
        tokio::select! {
            biased;
            _ = self.shutdown.cancelled() => Err(CredentialError::Cancelled),
            result = tokio::time::timeout(self.store_timeout, operation) => match result {
                Ok(inner) => inner,
                Err(_) => Err(CredentialError::Timeout),
            },
        }
    }

    async fn hash_password(&self, password: Password) -> Result<PasswordHash, CredentialError> {
        let hasher = self.password_hasher;
        let hash = tokio::task::spawn_blocking(move || hasher.hash(password.as_str()))
            .await
            .map_err(|e| CredentialError::Hashing(e.to_string()))??;

        PasswordHash::new(hash)
            .ok_or_else(|| CredentialError::Hashing("hasher returned an empty hash".to_string()))
    }

    async fn verify_password(
        &self,
        password: Password,
        hash: String,
    ) -> Result<bool, CredentialError> {
        let hasher = self.password_hasher;
        tokio::task::spawn_blocking(move || hasher.verify(password.as_str(), &hash))
            .await
            .map_err(|e| CredentialError::Hashing(e.to_string()))
    }
}

#[async_trait]
impl<CS> AuthServicePort for AuthService<CS>
where
    CS: CredentialStore,
{
    async fn signup(&self, request: AuthRequest) -> Result<Credential, CredentialError> {
        let command = request.validate()?;
        let password_hash = self.hash_password(command.password).await?;

        let credential = self
            .bounded(self.store.create(NewCredential {
                user: command.user,
                password_hash,
            }))
            .await?;

        tracing::info!(user = %credential.user, id = %credential.id, "Credential created");
        Ok(credential)
    }

    async fn login(&self, request: AuthRequest) -> Result<String, CredentialError> {
        let command = request.validate()?;

        let stored = match self.bounded(self.store.find_by_user(&command.user)).await {
            Ok(credential) => Some(credential),
            Err(CredentialError::NotFound(_)) => None,
            Err(e) => return Err(e),
        };

        let hash = stored
            .as_ref()
            .map(|credential| credential.password_hash.as_str().to_string())
            .unwrap_or_else(|| DUMMY_HASH.to_string());
        let matches = self.verify_password(command.password, hash).await?;

        match stored {
            Some(credential) if matches => {
                let token = self.token_issuer.issue(&credential)?;
                tracing::info!(user = %credential.user, "Login succeeded");
                Ok(token)
            }
            _ => {
                tracing::warn!(user = %command.user, "Login rejected");
                Err(CredentialError::InvalidCredentials)
            }
        }
    }
}
