use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::auth::token::generate_token;
use crate::features::providers::dtos::{CreateProviderDto, PatchProviderDto, ProviderResponseDto};
use crate::features::providers::models::Provider;

/// Service for provider directory operations
pub struct ProviderService {
    pool: PgPool,
}

impl ProviderService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a provider, minting its auth token. The token is written once
    /// here and never touched by update paths.
    pub async fn create(&self, dto: CreateProviderDto) -> Result<ProviderResponseDto> {
        let token = generate_token();

        let provider = sqlx::query_as::<_, Provider>(
            r#"
            INSERT INTO providers (name, email, language, currency, phone_number, auth_token)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, email, language, currency, phone_number, auth_token,
                      created_at, updated_at
            "#,
        )
        .bind(&dto.name)
        .bind(&dto.email)
        .bind(&dto.language)
        .bind(&dto.currency)
        .bind(&dto.phone_number)
        .bind(&token)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if e.as_database_error()
                .is_some_and(|db| db.is_unique_violation())
            {
                AppError::Validation("Provider with this email already exists".to_string())
            } else {
                tracing::error!("Failed to create provider: {:?}", e);
                AppError::Database(e)
            }
        })?;

        tracing::info!("Provider created: id={}, email={}", provider.id, provider.email);

        Ok(provider.into())
    }

    pub async fn list(&self) -> Result<Vec<ProviderResponseDto>> {
        let providers = sqlx::query_as::<_, Provider>(
            r#"
            SELECT id, name, email, language, currency, phone_number, auth_token,
                   created_at, updated_at
            FROM providers
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list providers: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(providers.into_iter().map(|p| p.into()).collect())
    }

    pub async fn get(&self, id: i64) -> Result<ProviderResponseDto> {
        let provider = sqlx::query_as::<_, Provider>(
            r#"
            SELECT id, name, email, language, currency, phone_number, auth_token,
                   created_at, updated_at
            FROM providers
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get provider: {:?}", e);
            AppError::Database(e)
        })?;

        provider
            .map(|p| p.into())
            .ok_or_else(|| AppError::NotFound("Provider not found".to_string()))
    }

    /// Apply a full or partial update. Fields left as `None` keep their
    /// stored value; the auth token is deliberately not updatable.
    pub async fn update(&self, id: i64, changes: PatchProviderDto) -> Result<ProviderResponseDto> {
        let provider = sqlx::query_as::<_, Provider>(
            r#"
            UPDATE providers
            SET name = COALESCE($2, name),
                email = COALESCE($3, email),
                language = COALESCE($4, language),
                currency = COALESCE($5, currency),
                phone_number = COALESCE($6, phone_number),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, email, language, currency, phone_number, auth_token,
                      created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(changes.name)
        .bind(changes.email)
        .bind(changes.language)
        .bind(changes.currency)
        .bind(changes.phone_number)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            if e.as_database_error()
                .is_some_and(|db| db.is_unique_violation())
            {
                AppError::Validation("Provider with this email already exists".to_string())
            } else {
                tracing::error!("Failed to update provider: {:?}", e);
                AppError::Database(e)
            }
        })?;

        provider
            .map(|p| ProviderResponseDto::from(p).without_token())
            .ok_or_else(|| AppError::NotFound("Provider not found".to_string()))
    }

    /// Delete a provider; owned service areas cascade in the database.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM providers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete provider: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Provider not found".to_string()));
        }

        tracing::info!("Provider deleted: id={}", id);
        Ok(())
    }

    /// Return the existing token for a known email.
    pub async fn token_for_email(&self, email: &str) -> Result<String> {
        let token = sqlx::query_scalar::<_, String>(
            "SELECT auth_token FROM providers WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to look up token by email: {:?}", e);
            AppError::Database(e)
        })?;

        token.ok_or_else(|| AppError::NotFound("Provider not found".to_string()))
    }
}
