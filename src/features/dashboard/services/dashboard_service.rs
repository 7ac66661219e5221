use sqlx::PgPool;

use crate::core::error::Result;
use crate::features::categories::models::Category;
use crate::features::dashboard::dtos::{
    DashboardRecentDto, DashboardStatsDto, DashboardSummaryDto,
};
use crate::features::events::models::Event;
use crate::features::media::models::MediaItem;
use crate::shared::constants::DASHBOARD_RECENT_LIMIT;

/// Service for the admin dashboard summary
pub struct DashboardService {
    pool: PgPool,
}

impl DashboardService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Entity counts plus the most recently created records of each entity
    pub async fn summary(&self) -> Result<DashboardSummaryDto> {
        let (categories_count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM categories")
            .fetch_one(&self.pool)
            .await?;
        let (events_count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM events")
            .fetch_one(&self.pool)
            .await?;
        let (media_count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM media_items")
            .fetch_one(&self.pool)
            .await?;

        let recent_categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, slug, subtitle, icon, description, display_order, is_active, created_at, updated_at
            FROM categories
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        )
        .bind(DASHBOARD_RECENT_LIMIT)
        .fetch_all(&self.pool)
        .await?;

        let recent_events = sqlx::query_as::<_, Event>(
            r#"
            SELECT id, name, slug, description, event_date, location, is_active, display_order, category_id, created_at, updated_at
            FROM events
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        )
        .bind(DASHBOARD_RECENT_LIMIT)
        .fetch_all(&self.pool)
        .await?;

        let recent_media = sqlx::query_as::<_, MediaItem>(
            r#"
            SELECT id, filename, original_name, url, thumbnail_url, alt, width, height, size, mime_type, duration, display_order, is_active, event_id, created_at, updated_at
            FROM media_items
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        )
        .bind(DASHBOARD_RECENT_LIMIT)
        .fetch_all(&self.pool)
        .await?;

        Ok(DashboardSummaryDto {
            stats: DashboardStatsDto {
                categories: categories_count,
                events: events_count,
                media: media_count,
            },
            recent: DashboardRecentDto {
                categories: recent_categories.into_iter().map(|c| c.into()).collect(),
                events: recent_events.into_iter().map(|e| e.into()).collect(),
                media: recent_media.into_iter().map(|m| m.into()).collect(),
            },
        })
    }
}
