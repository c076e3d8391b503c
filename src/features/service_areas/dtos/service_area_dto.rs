use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::shared::geo::{validate_polygon, GeoJsonPolygon};
use crate::shared::validation::validate_price;

/// Request DTO for creating a service area.
///
/// The owner is always the authenticated caller; there is no owner field.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateServiceAreaDto {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    /// Non-negative price, serialized as a decimal string
    #[validate(custom(function = validate_price))]
    pub price: Decimal,

    /// GeoJSON Polygon of [longitude, latitude] rings
    #[validate(custom(function = validate_polygon))]
    pub polygon: GeoJsonPolygon,
}

/// Request DTO for a full service-area update (PUT)
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateServiceAreaDto {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(custom(function = validate_price))]
    pub price: Decimal,

    #[validate(custom(function = validate_polygon))]
    pub polygon: GeoJsonPolygon,
}

/// Request DTO for a partial service-area update (PATCH)
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct PatchServiceAreaDto {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,

    #[validate(custom(function = validate_price))]
    pub price: Option<Decimal>,

    #[validate(custom(function = validate_polygon))]
    pub polygon: Option<GeoJsonPolygon>,
}

impl From<UpdateServiceAreaDto> for PatchServiceAreaDto {
    fn from(dto: UpdateServiceAreaDto) -> Self {
        Self {
            name: Some(dto.name),
            price: Some(dto.price),
            polygon: Some(dto.polygon),
        }
    }
}

/// Response DTO for a service area
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServiceAreaResponseDto {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    pub polygon: GeoJsonPolygon,
}
