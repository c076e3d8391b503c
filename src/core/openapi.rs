use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::core::error::ErrorResponse;
use crate::features::coverage::{dtos as coverage_dtos, handlers as coverage_handlers};
use crate::features::providers::{dtos as providers_dtos, handlers as providers_handlers};
use crate::features::service_areas::{dtos as areas_dtos, handlers as areas_handlers};
use crate::shared::geo::GeoJsonPolygon;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Providers
        providers_handlers::create_provider,
        providers_handlers::list_providers,
        providers_handlers::get_provider,
        providers_handlers::update_provider,
        providers_handlers::patch_provider,
        providers_handlers::delete_provider,
        providers_handlers::get_token,
        // Service areas (token auth)
        areas_handlers::create_area,
        areas_handlers::list_areas,
        areas_handlers::get_area,
        areas_handlers::update_area,
        areas_handlers::patch_area,
        areas_handlers::delete_area,
        // Coverage (public)
        coverage_handlers::get_areas,
    ),
    components(
        schemas(
            ErrorResponse,
            GeoJsonPolygon,
            // Providers
            providers_dtos::CreateProviderDto,
            providers_dtos::UpdateProviderDto,
            providers_dtos::PatchProviderDto,
            providers_dtos::ProviderResponseDto,
            providers_dtos::GetTokenDto,
            providers_dtos::TokenResponseDto,
            // Service areas
            areas_dtos::CreateServiceAreaDto,
            areas_dtos::UpdateServiceAreaDto,
            areas_dtos::PatchServiceAreaDto,
            areas_dtos::ServiceAreaResponseDto,
            // Coverage
            coverage_dtos::CoveredAreaDto,
        )
    ),
    tags(
        (name = "providers", description = "Provider directory and token issuance"),
        (name = "areas", description = "Service-area CRUD scoped to the authenticated provider"),
        (name = "coverage", description = "Public point-coverage lookup"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Coverage API",
        version = "0.1.0",
        description = "Providers, polygonal service areas and point coverage lookups",
    )
)]
pub struct ApiDoc;

/// Adds the `Authorization: Token <key>` security scheme to the OpenAPI document
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "token_auth",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                    "Authorization",
                    "Provider token, supplied as `Token <key>`",
                ))),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
