use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::model::AdminSession;
use crate::features::events::dtos::{
    AdminEventDto, CreateEventDto, DeleteEventResponseDto, EventDetailDto, EventResponseDto,
    UpdateEventDto,
};
use crate::features::events::services::EventService;
use crate::shared::types::{ApiResponse, Meta};

/// List all events with context (admin)
#[utoipa::path(
    get,
    path = "/api/admin/events",
    responses(
        (status = 200, description = "All events", body = ApiResponse<Vec<AdminEventDto>>),
        (status = 401, description = "Authentication required")
    ),
    security(("bearer_auth" = [])),
    tag = "admin-events"
)]
pub async fn list_events(
    _session: AdminSession,
    State(service): State<Arc<EventService>>,
) -> Result<Json<ApiResponse<Vec<AdminEventDto>>>> {
    let events = service.list_admin().await?;
    let total = events.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(events),
        None,
        Some(Meta { total }),
    )))
}

/// Create an event (admin)
#[utoipa::path(
    post,
    path = "/api/admin/events",
    request_body = CreateEventDto,
    responses(
        (status = 201, description = "Event created", body = ApiResponse<EventResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "Category not found"),
        (status = 409, description = "Slug already taken within the category")
    ),
    security(("bearer_auth" = [])),
    tag = "admin-events"
)]
pub async fn create_event(
    _session: AdminSession,
    State(service): State<Arc<EventService>>,
    AppJson(dto): AppJson<CreateEventDto>,
) -> Result<(StatusCode, Json<ApiResponse<EventResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let event = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(event), None, None)),
    ))
}

/// Get one event with its media (admin)
#[utoipa::path(
    get,
    path = "/api/admin/events/{id}",
    params(
        ("id" = Uuid, Path, description = "Event id")
    ),
    responses(
        (status = 200, description = "Event found", body = ApiResponse<EventDetailDto>),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "Event not found")
    ),
    security(("bearer_auth" = [])),
    tag = "admin-events"
)]
pub async fn get_event(
    _session: AdminSession,
    State(service): State<Arc<EventService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<EventDetailDto>>> {
    let event = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(event), None, None)))
}

/// Update an event (admin)
///
/// Only supplied fields change. The per-category slug scope is enforced
/// against the category the event ends up in.
#[utoipa::path(
    put,
    path = "/api/admin/events/{id}",
    params(
        ("id" = Uuid, Path, description = "Event id")
    ),
    request_body = UpdateEventDto,
    responses(
        (status = 200, description = "Event updated", body = ApiResponse<EventResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "Event or category not found"),
        (status = 409, description = "Slug already taken within the category")
    ),
    security(("bearer_auth" = [])),
    tag = "admin-events"
)]
pub async fn update_event(
    _session: AdminSession,
    State(service): State<Arc<EventService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateEventDto>,
) -> Result<Json<ApiResponse<EventResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let event = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(event), None, None)))
}

/// Delete an event (admin)
///
/// Fails with 409 while the event still owns media.
#[utoipa::path(
    delete,
    path = "/api/admin/events/{id}",
    params(
        ("id" = Uuid, Path, description = "Event id")
    ),
    responses(
        (status = 200, description = "Event deleted", body = ApiResponse<DeleteEventResponseDto>),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "Event not found"),
        (status = 409, description = "Event still owns media")
    ),
    security(("bearer_auth" = [])),
    tag = "admin-events"
)]
pub async fn delete_event(
    _session: AdminSession,
    State(service): State<Arc<EventService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<DeleteEventResponseDto>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        Some(DeleteEventResponseDto { deleted: true }),
        Some("Event deleted successfully".to_string()),
        None,
    )))
}
