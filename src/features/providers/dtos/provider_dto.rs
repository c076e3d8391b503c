use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::shared::validation::{validate_currency, validate_phone_number};

/// Request DTO for creating a provider
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProviderDto {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    /// Also the login identifier
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, max = 100, message = "Language must be 1-100 characters"))]
    pub language: String,

    /// 3-letter or 3-digit currency code
    #[validate(custom(function = validate_currency))]
    pub currency: String,

    #[validate(custom(function = validate_phone_number))]
    pub phone_number: String,
}

/// Request DTO for a full provider update (PUT)
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProviderDto {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, max = 100, message = "Language must be 1-100 characters"))]
    pub language: String,

    #[validate(custom(function = validate_currency))]
    pub currency: String,

    #[validate(custom(function = validate_phone_number))]
    pub phone_number: String,
}

/// Request DTO for a partial provider update (PATCH); supplied fields only
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct PatchProviderDto {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Language must be 1-100 characters"))]
    pub language: Option<String>,

    #[validate(custom(function = validate_currency))]
    pub currency: Option<String>,

    #[validate(custom(function = validate_phone_number))]
    pub phone_number: Option<String>,
}

impl From<UpdateProviderDto> for PatchProviderDto {
    fn from(dto: UpdateProviderDto) -> Self {
        Self {
            name: Some(dto.name),
            email: Some(dto.email),
            language: Some(dto.language),
            currency: Some(dto.currency),
            phone_number: Some(dto.phone_number),
        }
    }
}

/// Response DTO for a provider.
///
/// `auth_token` is present on create and read paths only; update responses
/// omit it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProviderResponseDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub language: String,
    pub currency: String,
    pub phone_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,
}

impl ProviderResponseDto {
    pub fn without_token(mut self) -> Self {
        self.auth_token = None;
        self
    }
}

/// Request DTO for the token issuance endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GetTokenDto {
    pub email: String,
}

/// Response DTO for the token issuance endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenResponseDto {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_create() -> CreateProviderDto {
        CreateProviderDto {
            name: "Test Smith".to_string(),
            email: "test@test.com".to_string(),
            language: "en".to_string(),
            currency: "TST".to_string(),
            phone_number: "+919739630033".to_string(),
        }
    }

    #[test]
    fn test_valid_provider_passes() {
        assert!(valid_create().validate().is_ok());
    }

    #[test]
    fn test_bad_currency_rejected() {
        let mut dto = valid_create();
        dto.currency = "EURO".to_string();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_bad_phone_rejected() {
        let mut dto = valid_create();
        dto.phone_number = "12ab5678".to_string();
        assert!(dto.validate().is_err());

        dto.phone_number = "1234567".to_string();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_bad_email_rejected() {
        let mut dto = valid_create();
        dto.email = "not-an-email".to_string();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_patch_validates_only_supplied_fields() {
        let dto = PatchProviderDto {
            language: Some("fr".to_string()),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());

        let dto = PatchProviderDto {
            currency: Some("X".to_string()),
            ..Default::default()
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_token_omitted_from_update_responses() {
        let dto = ProviderResponseDto {
            id: 1,
            name: "Test Smith".to_string(),
            email: "test@test.com".to_string(),
            language: "en".to_string(),
            currency: "TST".to_string(),
            phone_number: "+919739630033".to_string(),
            auth_token: Some("deadbeef".to_string()),
        };

        let with_token = serde_json::to_value(&dto).unwrap();
        assert_eq!(with_token["auth_token"], "deadbeef");

        let without = serde_json::to_value(dto.without_token()).unwrap();
        assert!(without.get("auth_token").is_none());
    }
}
