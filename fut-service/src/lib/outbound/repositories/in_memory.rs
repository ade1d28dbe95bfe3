use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::credential::errors::CredentialError;
use crate::domain::credential::models::Credential;
use crate::domain::credential::models::CredentialId;
use crate::domain::credential::models::NewCredential;
use crate::domain::credential::models::UserName;
use crate::domain::credential::ports::CredentialStore;

/// Credential store kept in process memory.
///
/// Used by tests and local runs without a database. Contents are lost on
/// restart.
#[derive(Default)]
pub struct InMemoryCredentialStore {
    credentials: RwLock<HashMap<String, Credential>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.credentials.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.credentials.read().await.is_empty()
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn find_by_user(&self, user: &UserName) -> Result<Credential, CredentialError> {
        self.credentials
            .read()
            .await
            .get(user.as_str())
            .cloned()
            .ok_or_else(|| CredentialError::NotFound(user.to_string()))
    }

    async fn create(&self, credential: NewCredential) -> Result<Credential, CredentialError> {
        // Check and insert under one write lock so concurrent creates race safely.
        let mut credentials = self.credentials.write().await;

        if credentials.contains_key(credential.user.as_str()) {
            return Err(CredentialError::Conflict(credential.user.to_string()));
        }

        let now = Utc::now();
        let created = Credential {
            id: CredentialId::new(),
            user: credential.user,
            password_hash: credential.password_hash,
            created_at: now,
            updated_at: now,
        };
        credentials.insert(created.user.as_str().to_string(), created.clone());

        Ok(created)
    }
}
