use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

use crate::features::service_areas::dtos::ServiceAreaResponseDto;
use crate::shared::geo::GeoJsonPolygon;

/// Database model for a service area.
///
/// `polygon` holds the GeoJSON text produced by `ST_AsGeoJSON` in the
/// select list; the geography column itself never crosses the wire.
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct ServiceArea {
    pub id: i64,
    pub provider_id: i64,
    pub name: String,
    pub price: Decimal,
    pub polygon: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<ServiceArea> for ServiceAreaResponseDto {
    type Error = serde_json::Error;

    fn try_from(area: ServiceArea) -> Result<Self, Self::Error> {
        Ok(Self {
            id: area.id,
            name: area.name,
            price: area.price,
            polygon: GeoJsonPolygon::from_json(&area.polygon)?,
        })
    }
}
