use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedProvider;

/// Resolves opaque token keys to provider identities.
pub struct TokenAuthenticator {
    pool: PgPool,
}

#[derive(Debug, sqlx::FromRow)]
struct ProviderIdentityRow {
    id: i64,
    name: String,
    email: String,
}

impl TokenAuthenticator {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Look up the provider owning `key`. Unknown keys are an auth failure,
    /// not a missing resource.
    pub async fn authenticate(&self, key: &str) -> Result<AuthenticatedProvider> {
        let row = sqlx::query_as::<_, ProviderIdentityRow>(
            r#"
            SELECT id, name, email
            FROM providers
            WHERE auth_token = $1
            "#,
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to look up auth token: {:?}", e);
            AppError::Database(e)
        })?;

        row.map(|r| AuthenticatedProvider {
            id: r.id,
            name: r.name,
            email: r.email,
        })
        .ok_or_else(|| AppError::Unauthorized("Invalid token".to_string()))
    }
}
