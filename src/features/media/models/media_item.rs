use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for a media item (photo or video) owned by an event.
/// Rows are created only by the ingestion pipeline, never directly.
#[derive(Debug, Clone, FromRow)]
pub struct MediaItem {
    pub id: Uuid,
    /// Storage key the bytes live under
    pub filename: String,
    pub original_name: Option<String>,
    pub url: String,
    pub thumbnail_url: Option<String>,
    pub alt: Option<String>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub size: i64,
    pub mime_type: Option<String>,
    /// Playback length in seconds, only meaningful for videos
    pub duration: Option<f64>,
    pub display_order: i32,
    pub is_active: bool,
    pub event_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
