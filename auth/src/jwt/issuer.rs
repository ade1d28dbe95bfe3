use std::sync::Arc;

use chrono::Duration;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;

use super::claims::Claims;
use super::errors::TokenError;
use crate::clock::Clock;
use crate::clock::SystemClock;

/// Anything a token can be issued for.
///
/// Implemented by the service's credential entity so the issuer does not
/// depend on how credentials are stored.
pub trait TokenSubject {
    /// Value of the `sub` claim.
    fn subject(&self) -> &str;

    /// Value of the custom `id` claim, if any.
    fn subject_id(&self) -> Option<String> {
        None
    }
}

/// Builds signed, time-bounded tokens.
///
/// Signs with HS256 (HMAC with SHA-256). The secret is supplied at
/// construction and never leaves the issuer.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    secret_is_empty: bool,
    lifetime: Duration,
    clock: Arc<dyn Clock>,
}

impl TokenIssuer {
    pub const ALGORITHM: Algorithm = Algorithm::HS256;

    /// Create a new issuer.
    ///
    /// # Arguments
    /// * `secret` - Symmetric signing secret
    /// * `lifetime` - Time between `iat` and `exp` of every issued token
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Keep lifetimes short; tokens cannot be revoked
    pub fn new(secret: &[u8], lifetime: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            secret_is_empty: secret.is_empty(),
            lifetime,
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the clock used for `iat`/`exp`.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Configured token lifetime.
    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }

    /// Issue a token for `subject`, valid from now for the configured lifetime.
    ///
    /// # Errors
    /// * `Signing` - Empty secret, non-positive or overflowing lifetime, or encoder failure
    pub fn issue<S: TokenSubject + ?Sized>(&self, subject: &S) -> Result<String, TokenError> {
        if self.lifetime <= Duration::zero() {
            return Err(TokenError::Signing(
                "token lifetime must be positive".to_string(),
            ));
        }

        let now = self.clock.now();
        let expires_at = now.checked_add_signed(self.lifetime).ok_or_else(|| {
            TokenError::Signing("token lifetime overflows the expiration time".to_string())
        })?;

        let mut claims = Claims::new(subject.subject())
            .with_issued_at(now.timestamp())
            .with_expiration(expires_at.timestamp());
        claims.id = subject.subject_id();

        self.issue_claims(&claims)
    }

    /// Sign arbitrary claims as they are.
    ///
    /// # Errors
    /// * `Signing` - Empty secret or encoder failure
    pub fn issue_claims(&self, claims: &Claims) -> Result<String, TokenError> {
        if self.secret_is_empty {
            return Err(TokenError::Signing("signing secret is empty".to_string()));
        }

        encode(&Header::new(Self::ALGORITHM), claims, &self.encoding_key)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }
}
