use serde::Deserialize;
use serde::Serialize;

/// Typed JWT claims.
///
/// The payload of every token this crate issues or accepts. Decoding is
/// strict: a token whose payload does not fit this shape is rejected rather
/// than read field by field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user name)
    pub sub: String,

    /// Issued at (Unix timestamp)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,

    /// Expiration time (Unix timestamp)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,

    /// Credential identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl Claims {
    /// Create claims carrying only a subject.
    pub fn new(sub: impl ToString) -> Self {
        Self {
            sub: sub.to_string(),
            iat: None,
            exp: None,
            id: None,
        }
    }

    /// Set issued at (Unix timestamp).
    pub fn with_issued_at(mut self, iat: i64) -> Self {
        self.iat = Some(iat);
        self
    }

    /// Set expiration (Unix timestamp).
    pub fn with_expiration(mut self, exp: i64) -> Self {
        self.exp = Some(exp);
        self
    }

    /// Set the credential identifier.
    pub fn with_id(mut self, id: impl ToString) -> Self {
        self.id = Some(id.to_string());
        self
    }

    /// Check if token is expired.
    ///
    /// A token is expired from the second named by `exp` onwards. Claims
    /// without `exp` never expire.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp.is_some_and(|exp| current_timestamp >= exp)
    }
}
