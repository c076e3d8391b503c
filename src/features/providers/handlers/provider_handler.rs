use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::providers::dtos::{
    CreateProviderDto, GetTokenDto, PatchProviderDto, ProviderResponseDto, TokenResponseDto,
    UpdateProviderDto,
};
use crate::features::providers::services::ProviderService;

/// Create a new provider
///
/// Currency must be a 3-character alphanumeric code; the phone number must
/// be at least 8 characters and contain no letters. A fresh auth token is
/// minted and returned.
#[utoipa::path(
    post,
    path = "/api/providers/",
    request_body = CreateProviderDto,
    responses(
        (status = 201, description = "Provider created", body = ProviderResponseDto),
        (status = 400, description = "Validation error")
    ),
    tag = "providers"
)]
pub async fn create_provider(
    State(service): State<Arc<ProviderService>>,
    AppJson(dto): AppJson<CreateProviderDto>,
) -> Result<(StatusCode, Json<ProviderResponseDto>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let provider = service.create(dto).await?;
    Ok((StatusCode::CREATED, Json(provider)))
}

/// List all providers
#[utoipa::path(
    get,
    path = "/api/providers/",
    responses(
        (status = 200, description = "List of providers", body = Vec<ProviderResponseDto>),
    ),
    tag = "providers"
)]
pub async fn list_providers(
    State(service): State<Arc<ProviderService>>,
) -> Result<Json<Vec<ProviderResponseDto>>> {
    let providers = service.list().await?;
    Ok(Json(providers))
}

/// Fetch one provider by id
#[utoipa::path(
    get,
    path = "/api/providers/{id}",
    params(("id" = i64, Path, description = "Provider id")),
    responses(
        (status = 200, description = "Provider found", body = ProviderResponseDto),
        (status = 404, description = "Provider not found")
    ),
    tag = "providers"
)]
pub async fn get_provider(
    State(service): State<Arc<ProviderService>>,
    Path(id): Path<i64>,
) -> Result<Json<ProviderResponseDto>> {
    let provider = service.get(id).await?;
    Ok(Json(provider))
}

/// Fully update a provider
///
/// The auth token is not updatable and is omitted from the response.
#[utoipa::path(
    put,
    path = "/api/providers/{id}",
    params(("id" = i64, Path, description = "Provider id")),
    request_body = UpdateProviderDto,
    responses(
        (status = 200, description = "Provider updated", body = ProviderResponseDto),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Provider not found")
    ),
    tag = "providers"
)]
pub async fn update_provider(
    State(service): State<Arc<ProviderService>>,
    Path(id): Path<i64>,
    AppJson(dto): AppJson<UpdateProviderDto>,
) -> Result<Json<ProviderResponseDto>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let provider = service.update(id, dto.into()).await?;
    Ok(Json(provider))
}

/// Partially update a provider
#[utoipa::path(
    patch,
    path = "/api/providers/{id}",
    params(("id" = i64, Path, description = "Provider id")),
    request_body = PatchProviderDto,
    responses(
        (status = 200, description = "Provider updated", body = ProviderResponseDto),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Provider not found")
    ),
    tag = "providers"
)]
pub async fn patch_provider(
    State(service): State<Arc<ProviderService>>,
    Path(id): Path<i64>,
    AppJson(dto): AppJson<PatchProviderDto>,
) -> Result<Json<ProviderResponseDto>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let provider = service.update(id, dto).await?;
    Ok(Json(provider))
}

/// Delete a provider (owned service areas are removed with it)
#[utoipa::path(
    delete,
    path = "/api/providers/{id}",
    params(("id" = i64, Path, description = "Provider id")),
    responses(
        (status = 204, description = "Provider deleted"),
        (status = 404, description = "Provider not found")
    ),
    tag = "providers"
)]
pub async fn delete_provider(
    State(service): State<Arc<ProviderService>>,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Look up a provider's existing token by email
#[utoipa::path(
    post,
    path = "/api/providers/get_token",
    request_body = GetTokenDto,
    responses(
        (status = 200, description = "Existing token", body = TokenResponseDto),
        (status = 400, description = "Missing email"),
        (status = 404, description = "No provider with that email")
    ),
    tag = "providers"
)]
pub async fn get_token(
    State(service): State<Arc<ProviderService>>,
    AppJson(dto): AppJson<GetTokenDto>,
) -> Result<Json<TokenResponseDto>> {
    if dto.email.is_empty() {
        return Err(AppError::BadRequest("Invalid arguments".to_string()));
    }

    let token = service.token_for_email(&dto.email).await?;
    Ok(Json(TokenResponseDto { token }))
}
