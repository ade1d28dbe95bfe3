use std::fmt;

use auth::TokenSubject;
use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::credential::errors::ValidationError;

/// Credential aggregate entity.
///
/// A user name paired with the hash of its password. Only stores create
/// credentials, so `id` and the timestamps are always store-assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub id: CredentialId,
    pub user: UserName,
    pub password_hash: PasswordHash,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TokenSubject for Credential {
    fn subject(&self) -> &str {
        self.user.as_str()
    }

    fn subject_id(&self) -> Option<String> {
        Some(self.id.to_string())
    }
}

/// Credential unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CredentialId(pub Uuid);

impl CredentialId {
    /// Generate a new random credential ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CredentialId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CredentialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// User name value type
///
/// Any non-empty string, taken as sent. Matching is exact, so "Alice" and
/// "alice" are different users.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserName(String);

impl UserName {
    /// Create a new user name.
    ///
    /// # Errors
    /// * `UserRequired` - Name is empty
    pub fn new(user: String) -> Result<Self, ValidationError> {
        if user.is_empty() {
            return Err(ValidationError::UserRequired);
        }
        Ok(Self(user))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Plaintext password as received from a client.
///
/// Never printed: `Debug` is redacted and there is no `Display`.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// # Errors
    /// * `PasswordRequired` - Password is empty
    pub fn new(password: String) -> Result<Self, ValidationError> {
        if password.is_empty() {
            return Err(ValidationError::PasswordRequired);
        }
        Ok(Self(password))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

/// Stored password hash (PHC string). Never empty.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Wrap a hash produced by the password hasher or read from storage.
    ///
    /// Returns `None` for an empty string.
    pub fn new(hash: String) -> Option<Self> {
        if hash.is_empty() {
            None
        } else {
            Some(Self(hash))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(<redacted>)")
    }
}

/// A credential that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCredential {
    pub user: UserName,
    pub password_hash: PasswordHash,
}

/// Raw login or signup input, exactly as the client sent it.
#[derive(Clone, Default)]
pub struct AuthRequest {
    pub user: String,
    pub password: String,
}

impl AuthRequest {
    pub fn new(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            password: password.into(),
        }
    }

    /// Check both fields are present, user first.
    ///
    /// # Errors
    /// * `UserRequired` - User is empty
    /// * `PasswordRequired` - Password is empty
    pub fn validate(self) -> Result<AuthCommand, ValidationError> {
        let user = UserName::new(self.user)?;
        let password = Password::new(self.password)?;
        Ok(AuthCommand { user, password })
    }
}

impl fmt::Debug for AuthRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthRequest")
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Validated login or signup input.
#[derive(Debug, Clone)]
pub struct AuthCommand {
    pub user: UserName,
    pub password: Password,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_complete_request() {
        let command = AuthRequest::new("admin", "test123").validate().unwrap();

        assert_eq!(command.user.as_str(), "admin");
        assert_eq!(command.password.as_str(), "test123");
    }

    #[test]
    fn test_validate_requires_user() {
        let result = AuthRequest::new("", "test123").validate();
        assert_eq!(result.unwrap_err(), ValidationError::UserRequired);
    }

    #[test]
    fn test_validate_keeps_whitespace_user_as_sent() {
        let command = AuthRequest::new("   ", "test123").validate().unwrap();
        assert_eq!(command.user.as_str(), "   ");

        let command = AuthRequest::new(" alice ", "test123").validate().unwrap();
        assert_eq!(command.user.as_str(), " alice ");
    }

    #[test]
    fn test_validate_requires_password() {
        let result = AuthRequest::new("admin", "").validate();
        assert_eq!(result.unwrap_err(), ValidationError::PasswordRequired);
    }

    #[test]
    fn test_validate_reports_user_before_password() {
        let result = AuthRequest::new("", "").validate();
        assert_eq!(result.unwrap_err(), ValidationError::UserRequired);
    }

    #[test]
    fn test_password_hash_rejects_empty() {
        assert!(PasswordHash::new(String::new()).is_none());
        assert!(PasswordHash::new("$argon2id$hash".to_string()).is_some());
    }

    #[test]
    fn test_debug_never_prints_secrets() {
        let request = AuthRequest::new("alice", "s3cret");
        let hash = PasswordHash::new("$argon2id$v=19$secret-hash".to_string()).unwrap();

        assert!(!format!("{:?}", request).contains("s3cret"));
        assert!(!format!("{:?}", request.clone().validate().unwrap()).contains("s3cret"));
        assert!(!format!("{:?}", hash).contains("secret-hash"));
    }

    #[test]
    fn test_credential_is_token_subject() {
        let credential = Credential {
            id: CredentialId::new(),
            user: UserName::new("alice".to_string()).unwrap(),
            password_hash: PasswordHash::new("$argon2id$hash".to_string()).unwrap(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        assert_eq!(credential.subject(), "alice");
        assert_eq!(credential.subject_id(), Some(credential.id.to_string()));
    }
}
