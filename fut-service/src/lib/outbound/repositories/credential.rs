use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::credential::errors::CredentialError;
use crate::domain::credential::models::Credential;
use crate::domain::credential::models::CredentialId;
use crate::domain::credential::models::NewCredential;
use crate::domain::credential::models::PasswordHash;
use crate::domain::credential::models::UserName;
use crate::domain::credential::ports::CredentialStore;

const USERNAME_UNIQUE_CONSTRAINT: &str = "credentials_username_key";

pub struct PostgresCredentialStore {
    pool: PgPool,
}

impl PostgresCredentialStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct CredentialRow {
    id: Uuid,
    username: String,
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<CredentialRow> for Credential {
    type Error = CredentialError;

    fn try_from(row: CredentialRow) -> Result<Self, Self::Error> {
        let user = UserName::new(row.username)
            .map_err(|e| CredentialError::Storage(format!("corrupt credential row: {}", e)))?;
        let password_hash = PasswordHash::new(row.password_hash).ok_or_else(|| {
            CredentialError::Storage("corrupt credential row: empty password hash".to_string())
        })?;

        Ok(Credential {
            id: CredentialId(row.id),
            user,
            password_hash,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn storage_error(e: sqlx::Error) -> CredentialError {
    match e {
        sqlx::Error::PoolTimedOut => CredentialError::Timeout,
        sqlx::Error::PoolClosed => CredentialError::Cancelled,
        other => CredentialError::Storage(other.to_string()),
    }
}

#[async_trait]
impl CredentialStore for PostgresCredentialStore {
    async fn find_by_user(&self, user: &UserName) -> Result<Credential, CredentialError> {
        let row = sqlx::query_as::<_, CredentialRow>(
            r#"
            SELECT id, username, password_hash, created_at, updated_at
            FROM credentials
            WHERE username = $1
            "#,
        )
        .bind(user.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_error)?;

        match row {
            Some(r) => Credential::try_from(r),
            None => Err(CredentialError::NotFound(user.to_string())),
        }
    }

    async fn create(&self, credential: NewCredential) -> Result<Credential, CredentialError> {
        let row = sqlx::query_as::<_, CredentialRow>(
            r#"
            INSERT INTO credentials (id, username, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, username, password_hash, created_at, updated_at
            "#,
        )
        .bind(CredentialId::new().0)
        .bind(credential.user.as_str())
        .bind(credential.password_hash.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation()
                    && db_err.constraint() == Some(USERNAME_UNIQUE_CONSTRAINT)
                {
                    return CredentialError::Conflict(credential.user.to_string());
                }
            }
            storage_error(e)
        })?;

        Credential::try_from(row)
    }
}
