use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::coverage::dtos::CoveredAreaDto;

/// Service for the public point-coverage query
pub struct CoverageService {
    pool: PgPool,
}

impl CoverageService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All service areas (across all providers) whose polygon contains the
    /// point. Containment is PostGIS geography intersection; the GiST
    /// index on `polygon` serves the lookup.
    pub async fn areas_covering(&self, lat: f64, lng: f64) -> Result<Vec<CoveredAreaDto>> {
        let areas = sqlx::query_as::<_, CoveredAreaDto>(
            r#"
            SELECT sa.name, sa.price, p.name AS provider
            FROM service_areas sa
            JOIN providers p ON p.id = sa.provider_id
            WHERE ST_Intersects(
                sa.polygon,
                ST_SetSRID(ST_MakePoint($1, $2), 4326)::geography
            )
            ORDER BY sa.id
            "#,
        )
        .bind(lng)
        .bind(lat)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Coverage query failed: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(areas)
    }
}
