use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::events::dtos::{
    AdminEventDto, CreateEventDto, EventDetailDto, EventResponseDto, EventWithContext,
    UpdateEventDto,
};
use crate::features::events::models::Event;
use crate::features::media::models::MediaItem;
use crate::shared::slug::{slug_for_rename, slugify};

/// Service for event operations
pub struct EventService {
    pool: PgPool,
}

impl EventService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Admin listing: every event with its category name and media count,
    /// ordered the way the admin UI shows them.
    pub async fn list_admin(&self) -> Result<Vec<AdminEventDto>> {
        let rows = sqlx::query_as::<_, EventWithContext>(
            r#"
            SELECT e.id, e.name, e.slug, e.description, e.event_date, e.location, e.is_active, e.display_order, e.category_id, e.created_at, e.updated_at,
                   c.name AS category_name,
                   COUNT(m.id) AS media_count
            FROM events e
            JOIN categories c ON c.id = e.category_id
            LEFT JOIN media_items m ON m.event_id = e.id
            GROUP BY e.id, c.name, c.display_order
            ORDER BY c.display_order, e.event_date DESC NULLS LAST, e.name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    /// One event with its media, ordered by display order with creation time
    /// breaking ties (duplicate orders are legal and must list stably).
    pub async fn get(&self, id: Uuid) -> Result<EventDetailDto> {
        let event = self.fetch(id).await?;

        let media = sqlx::query_as::<_, MediaItem>(
            r#"
            SELECT id, filename, original_name, url, thumbnail_url, alt, width, height, size, mime_type, duration, display_order, is_active, event_id, created_at, updated_at
            FROM media_items
            WHERE event_id = $1
            ORDER BY display_order, created_at
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(EventDetailDto {
            event: event.into(),
            media: media.into_iter().map(|m| m.into()).collect(),
        })
    }

    /// Create an event. The slug is derived from the name and must be unique
    /// within the owning category (not globally).
    pub async fn create(&self, dto: CreateEventDto) -> Result<EventResponseDto> {
        let category: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM categories WHERE id = $1")
            .bind(dto.category_id)
            .fetch_optional(&self.pool)
            .await?;

        if category.is_none() {
            return Err(AppError::NotFound(
                "The selected category does not exist".to_string(),
            ));
        }

        let slug = slugify(&dto.name);
        if slug.is_empty() {
            return Err(AppError::Validation(
                "name must contain at least one letter or digit".to_string(),
            ));
        }

        let existing: Option<(Uuid,)> =
            sqlx::query_as("SELECT id FROM events WHERE category_id = $1 AND slug = $2")
                .bind(dto.category_id)
                .bind(&slug)
                .fetch_optional(&self.pool)
                .await?;

        if existing.is_some() {
            return Err(AppError::Conflict(format!(
                "An event with the slug '{}' already exists in this category",
                slug
            )));
        }

        let event = sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events (name, slug, description, event_date, location, display_order, is_active, category_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, name, slug, description, event_date, location, is_active, display_order, category_id, created_at, updated_at
            "#,
        )
        .bind(&dto.name)
        .bind(&slug)
        .bind(&dto.description)
        .bind(dto.event_date)
        .bind(&dto.location)
        .bind(dto.display_order.unwrap_or(0))
        .bind(dto.is_active.unwrap_or(true))
        .bind(dto.category_id)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(
            "Event created: id={}, slug={}, category_id={}",
            event.id,
            event.slug,
            event.category_id
        );

        Ok(event.into())
    }

    /// Patch an event. The slug is recomputed only when the name actually
    /// changes, and the uniqueness check runs against the category the event
    /// will belong to after the update.
    pub async fn update(&self, id: Uuid, dto: UpdateEventDto) -> Result<EventResponseDto> {
        let existing = self.fetch(id).await?;

        if let Some(category_id) = dto.category_id {
            let category: Option<(Uuid,)> =
                sqlx::query_as("SELECT id FROM categories WHERE id = $1")
                    .bind(category_id)
                    .fetch_optional(&self.pool)
                    .await?;
            if category.is_none() {
                return Err(AppError::NotFound(
                    "The selected category does not exist".to_string(),
                ));
            }
        }

        let target_category_id = dto.category_id.unwrap_or(existing.category_id);

        let new_slug = match dto.name.as_deref() {
            Some(name) => slug_for_rename(&existing.name, name),
            None => None,
        };

        // The slug must stay unique among its future siblings, whether the
        // slug changed, the category changed, or both.
        let slug_to_check = new_slug.as_deref().unwrap_or(&existing.slug);
        if slug_to_check.is_empty() {
            return Err(AppError::Validation(
                "name must contain at least one letter or digit".to_string(),
            ));
        }
        if new_slug.is_some() || target_category_id != existing.category_id {
            let duplicate: Option<(Uuid,)> = sqlx::query_as(
                "SELECT id FROM events WHERE category_id = $1 AND slug = $2 AND id <> $3",
            )
            .bind(target_category_id)
            .bind(slug_to_check)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
            if duplicate.is_some() {
                return Err(AppError::Conflict(format!(
                    "An event with the slug '{}' already exists in this category",
                    slug_to_check
                )));
            }
        }

        let event = sqlx::query_as::<_, Event>(
            r#"
            UPDATE events SET
                name = COALESCE($2, name),
                slug = COALESCE($3, slug),
                description = COALESCE($4, description),
                event_date = COALESCE($5, event_date),
                location = COALESCE($6, location),
                display_order = COALESCE($7, display_order),
                is_active = COALESCE($8, is_active),
                category_id = COALESCE($9, category_id),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, slug, description, event_date, location, is_active, display_order, category_id, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&dto.name)
        .bind(&new_slug)
        .bind(&dto.description)
        .bind(dto.event_date)
        .bind(&dto.location)
        .bind(dto.display_order)
        .bind(dto.is_active)
        .bind(dto.category_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(event.into())
    }

    /// Delete an event. Blocked while it still owns media items.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let event = self.fetch(id).await?;

        let (media_count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM media_items WHERE event_id = $1")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        if media_count > 0 {
            return Err(AppError::Conflict(format!(
                "Event '{}' still owns {} media item(s) and cannot be deleted",
                event.name, media_count
            )));
        }

        sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        tracing::info!("Event deleted: id={}, slug={}", id, event.slug);

        Ok(())
    }

    async fn fetch(&self, id: Uuid) -> Result<Event> {
        sqlx::query_as::<_, Event>(
            r#"
            SELECT id, name, slug, description, event_date, location, is_active, display_order, category_id, created_at, updated_at
            FROM events
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Event not found".to_string()))
    }
}
