use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::features::providers::dtos::ProviderResponseDto;

/// Database model for a provider
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct Provider {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub language: String,
    pub currency: String,
    pub phone_number: String,
    pub auth_token: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Provider> for ProviderResponseDto {
    fn from(p: Provider) -> Self {
        Self {
            id: p.id,
            name: p.name,
            email: p.email,
            language: p.language,
            currency: p.currency,
            phone_number: p.phone_number,
            auth_token: Some(p.auth_token),
        }
    }
}
