use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::auth;
use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::dashboard::{dtos as dashboard_dtos, handlers as dashboard_handlers};
use crate::features::events::{dtos as events_dtos, handlers as events_handlers};
use crate::features::media::{dtos as media_dtos, handlers as media_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Public portfolio
        categories_handlers::list_categories,
        categories_handlers::get_category,
        // Categories (admin)
        categories_handlers::list_categories_admin,
        categories_handlers::create_category,
        categories_handlers::get_category_admin,
        categories_handlers::update_category,
        categories_handlers::delete_category,
        // Events (admin)
        events_handlers::list_events,
        events_handlers::create_event,
        events_handlers::get_event,
        events_handlers::update_event,
        events_handlers::delete_event,
        // Media (admin)
        media_handlers::upload_media,
        media_handlers::list_media,
        media_handlers::update_media,
        media_handlers::delete_media,
        // Dashboard (admin)
        dashboard_handlers::get_summary,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Auth
            auth::model::AdminSession,
            // Categories
            categories_dtos::CategoryResponseDto,
            categories_dtos::AdminCategoryDto,
            categories_dtos::PublicCategoryDto,
            categories_dtos::CreateCategoryDto,
            categories_dtos::UpdateCategoryDto,
            categories_dtos::DeleteCategoryResponseDto,
            ApiResponse<Vec<categories_dtos::PublicCategoryDto>>,
            ApiResponse<categories_dtos::PublicCategoryDto>,
            ApiResponse<Vec<categories_dtos::AdminCategoryDto>>,
            ApiResponse<categories_dtos::CategoryResponseDto>,
            ApiResponse<categories_dtos::DeleteCategoryResponseDto>,
            // Events
            events_dtos::EventResponseDto,
            events_dtos::AdminEventDto,
            events_dtos::EventDetailDto,
            events_dtos::PublicEventDto,
            events_dtos::CreateEventDto,
            events_dtos::UpdateEventDto,
            events_dtos::DeleteEventResponseDto,
            ApiResponse<Vec<events_dtos::AdminEventDto>>,
            ApiResponse<events_dtos::EventResponseDto>,
            ApiResponse<events_dtos::EventDetailDto>,
            ApiResponse<events_dtos::DeleteEventResponseDto>,
            // Media
            media_dtos::MediaResponseDto,
            media_dtos::AdminMediaDto,
            media_dtos::PublicMediaDto,
            media_dtos::UploadMediaDto,
            media_dtos::UpdateMediaDto,
            media_dtos::DeleteMediaResponseDto,
            ApiResponse<Vec<media_dtos::MediaResponseDto>>,
            ApiResponse<Vec<media_dtos::AdminMediaDto>>,
            ApiResponse<media_dtos::MediaResponseDto>,
            ApiResponse<media_dtos::DeleteMediaResponseDto>,
            // Dashboard
            dashboard_dtos::DashboardStatsDto,
            dashboard_dtos::DashboardRecentDto,
            dashboard_dtos::DashboardSummaryDto,
            ApiResponse<dashboard_dtos::DashboardSummaryDto>,
        )
    ),
    tags(
        (name = "categories", description = "Public portfolio feed"),
        (name = "admin-categories", description = "Category management"),
        (name = "admin-events", description = "Event management"),
        (name = "admin-media", description = "Media upload and management"),
        (name = "admin-dashboard", description = "Admin dashboard"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Galerie API",
        version = "0.1.0",
        description = "API documentation for the Galerie portfolio backend",
    )
)]
pub struct ApiDoc;

/// Adds the bearer session-token security scheme to the OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
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
