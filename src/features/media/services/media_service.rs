use std::sync::Arc;

use chrono::Utc;
use sqlx::PgPool;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::events::models::Event;
use crate::features::media::dtos::{
    AdminMediaDto, MediaResponseDto, MediaWithContext, UpdateMediaDto,
};
use crate::features::media::models::MediaItem;
use crate::features::media::services::pipeline::{plan_stored_file, IncomingFile};
use crate::modules::storage::StorageBackend;

/// Service for media operations: the ingestion pipeline plus reorder/delete
pub struct MediaService {
    pool: PgPool,
    storage: Arc<dyn StorageBackend>,
    max_file_size: usize,
}

impl MediaService {
    pub fn new(pool: PgPool, storage: Arc<dyn StorageBackend>, max_file_size: usize) -> Self {
        Self {
            pool,
            storage,
            max_file_size,
        }
    }

    /// Admin listing: every media item with its event and category names,
    /// newest first.
    pub async fn list_admin(&self) -> Result<Vec<AdminMediaDto>> {
        let rows = sqlx::query_as::<_, MediaWithContext>(
            r#"
            SELECT m.id, m.filename, m.original_name, m.url, m.thumbnail_url, m.alt, m.width, m.height, m.size, m.mime_type, m.duration, m.display_order, m.is_active, m.event_id, m.created_at, m.updated_at,
                   e.name AS event_name,
                   c.name AS category_name
            FROM media_items m
            JOIN events e ON e.id = m.event_id
            JOIN categories c ON c.id = e.category_id
            ORDER BY m.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    /// Ingest a batch of uploaded files for an event.
    ///
    /// Files are processed sequentially and judged independently: unsupported
    /// types and oversize files are skipped silently, a storage or insert
    /// failure is logged and skips just that file. The batch as a whole only
    /// fails when nothing could be stored.
    pub async fn upload_batch(
        &self,
        event_id: Uuid,
        files: Vec<IncomingFile>,
    ) -> Result<Vec<MediaResponseDto>> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            SELECT id, name, slug, description, event_date, location, is_active, display_order, category_id, created_at, updated_at
            FROM events
            WHERE id = $1
            "#,
        )
        .bind(event_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

        let (max_order,): (i32,) = sqlx::query_as(
            "SELECT COALESCE(MAX(display_order), 0) FROM media_items WHERE event_id = $1",
        )
        .bind(event_id)
        .fetch_one(&self.pool)
        .await?;

        let batch_millis = Utc::now().timestamp_millis();
        let batch_size = files.len();
        let mut stored: Vec<MediaResponseDto> = Vec::new();

        for file in files {
            let plan = match plan_stored_file(
                event.id,
                &event.name,
                batch_millis,
                max_order,
                stored.len(),
                &file,
                self.max_file_size,
            ) {
                Some(plan) => plan,
                None => {
                    debug!(
                        "Skipping '{}' ({}, {} bytes)",
                        file.name,
                        file.content_type,
                        file.data.len()
                    );
                    continue;
                }
            };

            let size = file.data.len() as i64;
            let url = match self
                .storage
                .store(&plan.filename, file.data, &file.content_type)
                .await
            {
                Ok(url) => url,
                Err(e) => {
                    warn!("Failed to store '{}': {}", file.name, e);
                    continue;
                }
            };

            let inserted = sqlx::query_as::<_, MediaItem>(
                r#"
                INSERT INTO media_items (filename, original_name, url, alt, size, mime_type, display_order, event_id)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                RETURNING id, filename, original_name, url, thumbnail_url, alt, width, height, size, mime_type, duration, display_order, is_active, event_id, created_at, updated_at
                "#,
            )
            .bind(&plan.filename)
            .bind(&file.name)
            .bind(&url)
            .bind(&plan.alt)
            .bind(size)
            .bind(&file.content_type)
            .bind(plan.display_order)
            .bind(event.id)
            .fetch_one(&self.pool)
            .await;

            match inserted {
                Ok(item) => stored.push(item.into()),
                Err(e) => {
                    // The blob stays behind; same trade-off as a crashed
                    // delete, it only costs storage space.
                    warn!("Failed to record '{}': {}", plan.filename, e);
                }
            }
        }

        if stored.is_empty() {
            return Err(AppError::Validation(
                "No files could be stored. Check that they are supported media types within the size limit."
                    .to_string(),
            ));
        }

        info!(
            "Batch upload for event {}: {}/{} files stored",
            event.id,
            stored.len(),
            batch_size
        );

        Ok(stored)
    }

    /// Patch a media item. `display_order` is overwritten as-is: no sibling
    /// renumbering, no uniqueness check, ties are broken by creation time on
    /// listing.
    pub async fn update(&self, id: Uuid, dto: UpdateMediaDto) -> Result<MediaResponseDto> {
        self.fetch(id).await?;

        let item = sqlx::query_as::<_, MediaItem>(
            r#"
            UPDATE media_items SET
                display_order = COALESCE($2, display_order),
                alt = COALESCE($3, alt),
                is_active = COALESCE($4, is_active),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, filename, original_name, url, thumbnail_url, alt, width, height, size, mime_type, duration, display_order, is_active, event_id, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(dto.display_order)
        .bind(&dto.alt)
        .bind(dto.is_active)
        .fetch_one(&self.pool)
        .await?;

        Ok(item.into())
    }

    /// Delete a media item: storage object first (best-effort), then the row.
    ///
    /// A failed blob delete is logged and does not block the record delete,
    /// so an orphaned object can remain in storage.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let item = self.fetch(id).await?;

        if let Err(e) = self.storage.delete(&item.filename).await {
            warn!("Failed to delete blob '{}': {}", item.filename, e);
        }

        sqlx::query("DELETE FROM media_items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        info!("Media item deleted: id={}, key={}", id, item.filename);

        Ok(())
    }

    async fn fetch(&self, id: Uuid) -> Result<MediaItem> {
        sqlx::query_as::<_, MediaItem>(
            r#"
            SELECT id, filename, original_name, url, thumbnail_url, alt, width, height, size, mime_type, duration, display_order, is_active, event_id, created_at, updated_at
            FROM media_items
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Media item not found".to_string()))
    }
}
