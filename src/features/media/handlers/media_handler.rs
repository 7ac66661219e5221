use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use tracing::debug;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::model::AdminSession;
use crate::features::media::dtos::{
    AdminMediaDto, DeleteMediaResponseDto, MediaResponseDto, UpdateMediaDto, UploadMediaDto,
};
use crate::features::media::services::pipeline::IncomingFile;
use crate::features::media::services::MediaService;
use crate::shared::types::{ApiResponse, Meta};

/// Batch-upload media to an event (admin)
///
/// Accepts multipart/form-data with:
/// - `event_id`: the target event (required)
/// - `files`: one or more file parts, processed in submission order
///
/// Unsupported or oversize files are skipped; the response carries only the
/// stored subset. The request fails only when nothing could be stored.
#[utoipa::path(
    post,
    path = "/api/admin/media/upload",
    tag = "admin-media",
    request_body(
        content = UploadMediaDto,
        content_type = "multipart/form-data",
        description = "Target event id plus one or more media files",
    ),
    responses(
        (status = 201, description = "At least one file stored", body = ApiResponse<Vec<MediaResponseDto>>),
        (status = 400, description = "Missing event id, empty batch, or nothing stored"),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "Event not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn upload_media(
    _session: AdminSession,
    State(service): State<Arc<MediaService>>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<Vec<MediaResponseDto>>>)> {
    let mut event_id: Option<Uuid> = None;
    let mut files: Vec<IncomingFile> = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        debug!("Failed to read multipart field: {}", e);
        AppError::BadRequest(format!("Failed to read multipart data: {}", e))
    })? {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "event_id" => {
                let text = field.text().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read event_id field: {}", e))
                })?;
                let id = Uuid::parse_str(text.trim())
                    .map_err(|_| AppError::BadRequest("event_id must be a UUID".to_string()))?;
                event_id = Some(id);
            }
            "files" => {
                let content_type = field
                    .content_type()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string());

                let name = field
                    .file_name()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "unnamed".to_string());

                let data = field.bytes().await.map_err(|e| {
                    debug!("Failed to read file bytes: {}", e);
                    AppError::BadRequest(format!("Failed to read file data: {}", e))
                })?;

                files.push(IncomingFile {
                    name,
                    content_type,
                    data: data.to_vec(),
                });
            }
            _ => {
                debug!("Ignoring unknown field: {}", field_name);
            }
        }
    }

    let event_id =
        event_id.ok_or_else(|| AppError::BadRequest("event_id is required".to_string()))?;

    if files.is_empty() {
        return Err(AppError::BadRequest("No files were selected".to_string()));
    }

    let stored = service.upload_batch(event_id, files).await?;
    let total = stored.len() as i64;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(stored),
            None,
            Some(Meta { total }),
        )),
    ))
}

/// List all media items with context (admin)
#[utoipa::path(
    get,
    path = "/api/admin/media",
    responses(
        (status = 200, description = "All media items, newest first", body = ApiResponse<Vec<AdminMediaDto>>),
        (status = 401, description = "Authentication required")
    ),
    security(("bearer_auth" = [])),
    tag = "admin-media"
)]
pub async fn list_media(
    _session: AdminSession,
    State(service): State<Arc<MediaService>>,
) -> Result<Json<ApiResponse<Vec<AdminMediaDto>>>> {
    let media = service.list_admin().await?;
    let total = media.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(media),
        None,
        Some(Meta { total }),
    )))
}

/// Update a media item (admin)
///
/// Unconditional overwrite of the supplied fields; `display_order` may
/// collide with a sibling's, ties are broken by creation time.
#[utoipa::path(
    put,
    path = "/api/admin/media/{id}",
    params(
        ("id" = Uuid, Path, description = "Media item id")
    ),
    request_body = UpdateMediaDto,
    responses(
        (status = 200, description = "Media item updated", body = ApiResponse<MediaResponseDto>),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "Media item not found")
    ),
    security(("bearer_auth" = [])),
    tag = "admin-media"
)]
pub async fn update_media(
    _session: AdminSession,
    State(service): State<Arc<MediaService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateMediaDto>,
) -> Result<Json<ApiResponse<MediaResponseDto>>> {
    let item = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(item), None, None)))
}

/// Delete a media item (admin)
///
/// Removes the storage object (best-effort) and then the record.
#[utoipa::path(
    delete,
    path = "/api/admin/media/{id}",
    params(
        ("id" = Uuid, Path, description = "Media item id")
    ),
    responses(
        (status = 200, description = "Media item deleted", body = ApiResponse<DeleteMediaResponseDto>),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "Media item not found")
    ),
    security(("bearer_auth" = [])),
    tag = "admin-media"
)]
pub async fn delete_media(
    _session: AdminSession,
    State(service): State<Arc<MediaService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<DeleteMediaResponseDto>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        Some(DeleteMediaResponseDto { deleted: true }),
        Some("Media item deleted successfully".to_string()),
        None,
    )))
}
