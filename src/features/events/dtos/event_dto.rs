use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::events::models::Event;
use crate::features::media::dtos::{MediaResponseDto, PublicMediaDto};

/// Response DTO for an event (admin surface)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventResponseDto {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub event_date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub is_active: bool,
    pub display_order: i32,
    pub category_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Event> for EventResponseDto {
    fn from(e: Event) -> Self {
        Self {
            id: e.id,
            name: e.name,
            slug: e.slug,
            description: e.description,
            event_date: e.event_date,
            location: e.location,
            is_active: e.is_active,
            display_order: e.display_order,
            category_id: e.category_id,
            created_at: e.created_at,
            updated_at: e.updated_at,
        }
    }
}

/// Event row joined with its category name and media count (admin listing)
#[derive(Debug, FromRow)]
pub struct EventWithContext {
    #[sqlx(flatten)]
    pub event: Event,
    pub category_name: String,
    pub media_count: i64,
}

/// Admin listing entry: event plus owning category name and media count
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AdminEventDto {
    #[serde(flatten)]
    pub event: EventResponseDto,
    pub category_name: String,
    pub media_count: i64,
}

impl From<EventWithContext> for AdminEventDto {
    fn from(row: EventWithContext) -> Self {
        Self {
            event: row.event.into(),
            category_name: row.category_name,
            media_count: row.media_count,
        }
    }
}

/// Public portfolio entry: active event with its active media
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PublicEventDto {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub event_date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub display_order: i32,
    pub media: Vec<PublicMediaDto>,
}

impl PublicEventDto {
    pub fn from_event(event: Event, media: Vec<PublicMediaDto>) -> Self {
        Self {
            id: event.id,
            name: event.name,
            slug: event.slug,
            description: event.description,
            event_date: event.event_date,
            location: event.location,
            display_order: event.display_order,
            media,
        }
    }
}

/// Admin detail view: event plus its media, in display order
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EventDetailDto {
    #[serde(flatten)]
    pub event: EventResponseDto,
    pub media: Vec<MediaResponseDto>,
}

/// Request DTO for creating an event
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEventDto {
    /// Display name; the slug is derived from it server-side
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    pub category_id: Uuid,
    pub description: Option<String>,
    pub event_date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

/// Request DTO for updating an event; only supplied fields change
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateEventDto {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    pub category_id: Option<Uuid>,
    pub description: Option<String>,
    pub event_date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

/// Response DTO for delete operations
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteEventResponseDto {
    pub deleted: bool,
}
