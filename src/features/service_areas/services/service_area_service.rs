use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::service_areas::dtos::{
    CreateServiceAreaDto, PatchServiceAreaDto, ServiceAreaResponseDto,
};
use crate::features::service_areas::models::ServiceArea;

/// Service for service-area operations, always scoped to one provider.
///
/// The scoping is enforced in SQL: every statement filters on
/// `provider_id`, so an area owned by someone else is indistinguishable
/// from one that does not exist.
pub struct ServiceAreaService {
    pool: PgPool,
}

const NOT_FOUND: &str = "Service area not found";

impl ServiceAreaService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create an area owned by `provider_id` (the authenticated caller).
    pub async fn create(
        &self,
        provider_id: i64,
        dto: CreateServiceAreaDto,
    ) -> Result<ServiceAreaResponseDto> {
        let area = sqlx::query_as::<_, ServiceArea>(
            r#"
            INSERT INTO service_areas (provider_id, name, price, polygon)
            VALUES ($1, $2, $3, ST_GeomFromGeoJSON($4::text)::geography)
            RETURNING id, provider_id, name, price, ST_AsGeoJSON(polygon) AS polygon,
                      created_at, updated_at
            "#,
        )
        .bind(provider_id)
        .bind(&dto.name)
        .bind(dto.price)
        .bind(dto.polygon.to_json())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create service area: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Service area created: id={}, provider_id={}",
            area.id,
            area.provider_id
        );

        to_dto(area)
    }

    pub async fn list(&self, provider_id: i64) -> Result<Vec<ServiceAreaResponseDto>> {
        let areas = sqlx::query_as::<_, ServiceArea>(
            r#"
            SELECT id, provider_id, name, price, ST_AsGeoJSON(polygon) AS polygon,
                   created_at, updated_at
            FROM service_areas
            WHERE provider_id = $1
            ORDER BY id
            "#,
        )
        .bind(provider_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list service areas: {:?}", e);
            AppError::Database(e)
        })?;

        areas.into_iter().map(to_dto).collect()
    }

    pub async fn get(&self, provider_id: i64, id: i64) -> Result<ServiceAreaResponseDto> {
        let area = sqlx::query_as::<_, ServiceArea>(
            r#"
            SELECT id, provider_id, name, price, ST_AsGeoJSON(polygon) AS polygon,
                   created_at, updated_at
            FROM service_areas
            WHERE id = $1 AND provider_id = $2
            "#,
        )
        .bind(id)
        .bind(provider_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get service area: {:?}", e);
            AppError::Database(e)
        })?;

        area.map(to_dto)
            .transpose()?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))
    }

    /// Apply a full or partial update to one of the caller's areas.
    /// The owner never changes.
    pub async fn update(
        &self,
        provider_id: i64,
        id: i64,
        changes: PatchServiceAreaDto,
    ) -> Result<ServiceAreaResponseDto> {
        let polygon_json = changes.polygon.as_ref().map(|p| p.to_json());

        let area = sqlx::query_as::<_, ServiceArea>(
            r#"
            UPDATE service_areas
            SET name = COALESCE($3, name),
                price = COALESCE($4, price),
                polygon = COALESCE(ST_GeomFromGeoJSON($5::text)::geography, polygon),
                updated_at = NOW()
            WHERE id = $1 AND provider_id = $2
            RETURNING id, provider_id, name, price, ST_AsGeoJSON(polygon) AS polygon,
                      created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(provider_id)
        .bind(changes.name)
        .bind(changes.price)
        .bind(polygon_json)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update service area: {:?}", e);
            AppError::Database(e)
        })?;

        area.map(to_dto)
            .transpose()?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))
    }

    pub async fn delete(&self, provider_id: i64, id: i64) -> Result<()> {
        let result =
            sqlx::query("DELETE FROM service_areas WHERE id = $1 AND provider_id = $2")
                .bind(id)
                .bind(provider_id)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to delete service area: {:?}", e);
                    AppError::Database(e)
                })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(NOT_FOUND.to_string()));
        }

        tracing::info!("Service area deleted: id={}, provider_id={}", id, provider_id);
        Ok(())
    }
}

fn to_dto(area: ServiceArea) -> Result<ServiceAreaResponseDto> {
    ServiceAreaResponseDto::try_from(area)
        .map_err(|e| AppError::Internal(format!("Stored polygon is not valid GeoJSON: {}", e)))
}
