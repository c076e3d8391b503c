use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::AuthenticatedProvider;
use crate::features::service_areas::dtos::{
    CreateServiceAreaDto, PatchServiceAreaDto, ServiceAreaResponseDto, UpdateServiceAreaDto,
};
use crate::features::service_areas::services::ServiceAreaService;

/// Create a service area owned by the authenticated provider
///
/// The polygon must be a valid GeoJSON Polygon; the owner is always the
/// caller regardless of the request body.
#[utoipa::path(
    post,
    path = "/api/areas/",
    request_body = CreateServiceAreaDto,
    responses(
        (status = 201, description = "Service area created", body = ServiceAreaResponseDto),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Missing or invalid token")
    ),
    security(("token_auth" = [])),
    tag = "areas"
)]
pub async fn create_area(
    State(service): State<Arc<ServiceAreaService>>,
    provider: AuthenticatedProvider,
    AppJson(dto): AppJson<CreateServiceAreaDto>,
) -> Result<(StatusCode, Json<ServiceAreaResponseDto>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let area = service.create(provider.id, dto).await?;
    Ok((StatusCode::CREATED, Json(area)))
}

/// List the authenticated provider's service areas
#[utoipa::path(
    get,
    path = "/api/areas/",
    responses(
        (status = 200, description = "Caller's service areas", body = Vec<ServiceAreaResponseDto>),
        (status = 401, description = "Missing or invalid token")
    ),
    security(("token_auth" = [])),
    tag = "areas"
)]
pub async fn list_areas(
    State(service): State<Arc<ServiceAreaService>>,
    provider: AuthenticatedProvider,
) -> Result<Json<Vec<ServiceAreaResponseDto>>> {
    let areas = service.list(provider.id).await?;
    Ok(Json(areas))
}

/// Fetch one of the caller's service areas
///
/// Areas owned by other providers are reported as 404.
#[utoipa::path(
    get,
    path = "/api/areas/{id}",
    params(("id" = i64, Path, description = "Service area id")),
    responses(
        (status = 200, description = "Service area found", body = ServiceAreaResponseDto),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Not owned by caller or absent")
    ),
    security(("token_auth" = [])),
    tag = "areas"
)]
pub async fn get_area(
    State(service): State<Arc<ServiceAreaService>>,
    provider: AuthenticatedProvider,
    Path(id): Path<i64>,
) -> Result<Json<ServiceAreaResponseDto>> {
    let area = service.get(provider.id, id).await?;
    Ok(Json(area))
}

/// Fully update one of the caller's service areas
#[utoipa::path(
    put,
    path = "/api/areas/{id}",
    params(("id" = i64, Path, description = "Service area id")),
    request_body = UpdateServiceAreaDto,
    responses(
        (status = 200, description = "Service area updated", body = ServiceAreaResponseDto),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Not owned by caller or absent")
    ),
    security(("token_auth" = [])),
    tag = "areas"
)]
pub async fn update_area(
    State(service): State<Arc<ServiceAreaService>>,
    provider: AuthenticatedProvider,
    Path(id): Path<i64>,
    AppJson(dto): AppJson<UpdateServiceAreaDto>,
) -> Result<Json<ServiceAreaResponseDto>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let area = service.update(provider.id, id, dto.into()).await?;
    Ok(Json(area))
}

/// Partially update one of the caller's service areas
#[utoipa::path(
    patch,
    path = "/api/areas/{id}",
    params(("id" = i64, Path, description = "Service area id")),
    request_body = PatchServiceAreaDto,
    responses(
        (status = 200, description = "Service area updated", body = ServiceAreaResponseDto),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Not owned by caller or absent")
    ),
    security(("token_auth" = [])),
    tag = "areas"
)]
pub async fn patch_area(
    State(service): State<Arc<ServiceAreaService>>,
    provider: AuthenticatedProvider,
    Path(id): Path<i64>,
    AppJson(dto): AppJson<PatchServiceAreaDto>,
) -> Result<Json<ServiceAreaResponseDto>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let area = service.update(provider.id, id, dto).await?;
    Ok(Json(area))
}

/// Delete one of the caller's service areas
#[utoipa::path(
    delete,
    path = "/api/areas/{id}",
    params(("id" = i64, Path, description = "Service area id")),
    responses(
        (status = 204, description = "Service area deleted"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Not owned by caller or absent")
    ),
    security(("token_auth" = [])),
    tag = "areas"
)]
pub async fn delete_area(
    State(service): State<Arc<ServiceAreaService>>,
    provider: AuthenticatedProvider,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    service.delete(provider.id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
