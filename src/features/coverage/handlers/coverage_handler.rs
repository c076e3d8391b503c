use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::core::error::{AppError, Result};
use crate::features::coverage::dtos::{CoverageQuery, CoveredAreaDto};
use crate::features::coverage::services::CoverageService;

/// Find service areas covering a point
///
/// Public endpoint: returns every area, across all providers, whose
/// polygon contains the supplied lat/lng.
#[utoipa::path(
    get,
    path = "/api/get_areas/",
    params(CoverageQuery),
    responses(
        (status = 200, description = "Areas covering the point", body = Vec<CoveredAreaDto>),
        (status = 400, description = "Missing or non-numeric lat/lng")
    ),
    tag = "coverage"
)]
pub async fn get_areas(
    State(service): State<Arc<CoverageService>>,
    Query(query): Query<CoverageQuery>,
) -> Result<Json<Vec<CoveredAreaDto>>> {
    let (lat, lng) = query
        .point()
        .ok_or_else(|| AppError::BadRequest("Invalid arguments".to_string()))?;

    let areas = service.areas_covering(lat, lng).await?;
    Ok(Json(areas))
}
