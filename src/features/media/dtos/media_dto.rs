use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::media::models::MediaItem;

/// Response DTO for a media item (admin surface)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MediaResponseDto {
    pub id: Uuid,
    pub filename: String,
    pub original_name: Option<String>,
    pub url: String,
    pub thumbnail_url: Option<String>,
    pub alt: Option<String>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub size: i64,
    pub mime_type: Option<String>,
    pub duration: Option<f64>,
    pub display_order: i32,
    pub is_active: bool,
    pub event_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<MediaItem> for MediaResponseDto {
    fn from(m: MediaItem) -> Self {
        Self {
            id: m.id,
            filename: m.filename,
            original_name: m.original_name,
            url: m.url,
            thumbnail_url: m.thumbnail_url,
            alt: m.alt,
            width: m.width,
            height: m.height,
            size: m.size,
            mime_type: m.mime_type,
            duration: m.duration,
            display_order: m.display_order,
            is_active: m.is_active,
            event_id: m.event_id,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

/// Public gallery entry: just what a visitor needs to render the item
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PublicMediaDto {
    pub id: Uuid,
    pub url: String,
    pub thumbnail_url: Option<String>,
    pub alt: Option<String>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub mime_type: Option<String>,
    pub duration: Option<f64>,
    pub display_order: i32,
}

impl From<MediaItem> for PublicMediaDto {
    fn from(m: MediaItem) -> Self {
        Self {
            id: m.id,
            url: m.url,
            thumbnail_url: m.thumbnail_url,
            alt: m.alt,
            width: m.width,
            height: m.height,
            mime_type: m.mime_type,
            duration: m.duration,
            display_order: m.display_order,
        }
    }
}

/// Media row joined with event and category names (admin listing)
#[derive(Debug, FromRow)]
pub struct MediaWithContext {
    #[sqlx(flatten)]
    pub media: MediaItem,
    pub event_name: String,
    pub category_name: String,
}

/// Admin listing entry: media item plus owning event and category names
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AdminMediaDto {
    #[serde(flatten)]
    pub media: MediaResponseDto,
    pub event_name: String,
    pub category_name: String,
}

impl From<MediaWithContext> for AdminMediaDto {
    fn from(row: MediaWithContext) -> Self {
        Self {
            media: row.media.into(),
            event_name: row.event_name,
            category_name: row.category_name,
        }
    }
}

/// Batch upload form for OpenAPI documentation.
/// The actual handler uses axum's Multipart extractor directly; the `files`
/// part may repeat.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct UploadMediaDto {
    /// Target event id
    pub event_id: String,
    /// A media file; repeat the part to upload a batch
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub files: String,
}

/// Request DTO for updating a media item; only supplied fields change.
/// `display_order` is an unconditional overwrite with no uniqueness check.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateMediaDto {
    pub display_order: Option<i32>,
    pub alt: Option<String>,
    pub is_active: Option<bool>,
}

/// Response DTO for delete operations
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteMediaResponseDto {
    pub deleted: bool,
}

/// MIME types the ingestion pipeline accepts. Anything else is silently
/// skipped, not rejected, so a mixed batch can still partially succeed.
pub const ACCEPTED_MIME_TYPES: &[&str] = &[
    "image/jpeg",
    "image/png",
    "image/gif",
    "image/webp",
    "image/heic",
    "image/heif",
    "video/mp4",
    "video/quicktime",
    "video/x-msvideo",
    "video/x-matroska",
    "video/webm",
];

/// Check if a MIME type is accepted by the pipeline
pub fn is_accepted_mime_type(content_type: &str) -> bool {
    ACCEPTED_MIME_TYPES.contains(&content_type)
}

/// Fallback extension for a content type when the filename has none
pub fn extension_from_mime_type(content_type: &str) -> Option<&'static str> {
    match content_type {
        "image/jpeg" => Some("jpg"),
        "image/png" => Some("png"),
        "image/gif" => Some("gif"),
        "image/webp" => Some("webp"),
        "image/heic" => Some("heic"),
        "image/heif" => Some("heif"),
        "video/mp4" => Some("mp4"),
        "video/quicktime" => Some("mov"),
        "video/x-msvideo" => Some("avi"),
        "video/x-matroska" => Some("mkv"),
        "video/webm" => Some("webm"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepted_mime_types() {
        assert!(is_accepted_mime_type("image/jpeg"));
        assert!(is_accepted_mime_type("image/heic"));
        assert!(is_accepted_mime_type("video/quicktime"));
        assert!(!is_accepted_mime_type("application/pdf"));
        assert!(!is_accepted_mime_type("text/html"));
        assert!(!is_accepted_mime_type("image/svg+xml"));
    }

    #[test]
    fn test_extension_from_mime_type() {
        assert_eq!(extension_from_mime_type("image/jpeg"), Some("jpg"));
        assert_eq!(extension_from_mime_type("video/x-matroska"), Some("mkv"));
        assert_eq!(extension_from_mime_type("application/pdf"), None);
    }
}
