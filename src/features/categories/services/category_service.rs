use std::collections::HashMap;

use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{
    AdminCategoryDto, CategoryResponseDto, CategoryWithEventCount, CreateCategoryDto,
    PublicCategoryDto, UpdateCategoryDto,
};
use crate::features::categories::models::Category;
use crate::features::events::dtos::PublicEventDto;
use crate::features::events::models::Event;
use crate::features::media::dtos::PublicMediaDto;
use crate::features::media::models::MediaItem;
use crate::shared::slug::{slug_for_rename, slugify};

/// Service for category operations
pub struct CategoryService {
    pool: PgPool,
}

impl CategoryService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Public portfolio feed: active categories with their active events and
    /// active media, everything ordered by display_order.
    pub async fn list_public(&self) -> Result<Vec<PublicCategoryDto>> {
        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, slug, subtitle, icon, description, display_order, is_active, created_at, updated_at
            FROM categories
            WHERE is_active = TRUE
            ORDER BY display_order, name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let events = sqlx::query_as::<_, Event>(
            r#"
            SELECT id, name, slug, description, event_date, location, is_active, display_order, category_id, created_at, updated_at
            FROM events
            WHERE is_active = TRUE
            ORDER BY display_order, name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let media = sqlx::query_as::<_, MediaItem>(
            r#"
            SELECT id, filename, original_name, url, thumbnail_url, alt, width, height, size, mime_type, duration, display_order, is_active, event_id, created_at, updated_at
            FROM media_items
            WHERE is_active = TRUE
            ORDER BY display_order, created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(Self::assemble_feed(categories, events, media))
    }

    /// One active category by slug, with its active events and media
    pub async fn get_public_by_slug(&self, slug: &str) -> Result<PublicCategoryDto> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, slug, subtitle, icon, description, display_order, is_active, created_at, updated_at
            FROM categories
            WHERE slug = $1 AND is_active = TRUE
            "#,
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Category '{}' not found", slug)))?;

        let events = sqlx::query_as::<_, Event>(
            r#"
            SELECT id, name, slug, description, event_date, location, is_active, display_order, category_id, created_at, updated_at
            FROM events
            WHERE category_id = $1 AND is_active = TRUE
            ORDER BY display_order, name
            "#,
        )
        .bind(category.id)
        .fetch_all(&self.pool)
        .await?;

        let media = sqlx::query_as::<_, MediaItem>(
            r#"
            SELECT m.id, m.filename, m.original_name, m.url, m.thumbnail_url, m.alt, m.width, m.height, m.size, m.mime_type, m.duration, m.display_order, m.is_active, m.event_id, m.created_at, m.updated_at
            FROM media_items m
            JOIN events e ON e.id = m.event_id
            WHERE e.category_id = $1 AND m.is_active = TRUE
            ORDER BY m.display_order, m.created_at
            "#,
        )
        .bind(category.id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Self::assemble_feed(vec![category], events, media)
            .pop()
            .expect("assemble_feed keeps every input category"))
    }

    fn assemble_feed(
        categories: Vec<Category>,
        events: Vec<Event>,
        media: Vec<MediaItem>,
    ) -> Vec<PublicCategoryDto> {
        let mut media_by_event: HashMap<Uuid, Vec<PublicMediaDto>> = HashMap::new();
        for item in media {
            media_by_event
                .entry(item.event_id)
                .or_default()
                .push(item.into());
        }

        let mut events_by_category: HashMap<Uuid, Vec<PublicEventDto>> = HashMap::new();
        for event in events {
            let media = media_by_event.remove(&event.id).unwrap_or_default();
            events_by_category
                .entry(event.category_id)
                .or_default()
                .push(PublicEventDto::from_event(event, media));
        }

        categories
            .into_iter()
            .map(|category| {
                let events = events_by_category.remove(&category.id).unwrap_or_default();
                PublicCategoryDto::from_category(category, events)
            })
            .collect()
    }

    /// Admin listing: every category with its event count
    pub async fn list_admin(&self) -> Result<Vec<AdminCategoryDto>> {
        let rows = sqlx::query_as::<_, CategoryWithEventCount>(
            r#"
            SELECT c.id, c.name, c.slug, c.subtitle, c.icon, c.description, c.display_order, c.is_active, c.created_at, c.updated_at,
                   COUNT(e.id) AS event_count
            FROM categories c
            LEFT JOIN events e ON e.category_id = c.id
            GROUP BY c.id
            ORDER BY c.display_order, c.name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    pub async fn get(&self, id: Uuid) -> Result<CategoryResponseDto> {
        let category = self.fetch(id).await?;
        Ok(category.into())
    }

    /// Create a category; the slug is derived from the name and must be
    /// globally unique. A colliding name is rejected, never auto-suffixed.
    pub async fn create(&self, dto: CreateCategoryDto) -> Result<CategoryResponseDto> {
        let slug = slugify(&dto.name);
        if slug.is_empty() {
            return Err(AppError::Validation(
                "name must contain at least one letter or digit".to_string(),
            ));
        }

        let existing: Option<(Uuid,)> =
            sqlx::query_as("SELECT id FROM categories WHERE slug = $1")
                .bind(&slug)
                .fetch_optional(&self.pool)
                .await?;

        if existing.is_some() {
            return Err(AppError::Conflict(format!(
                "A category with the slug '{}' already exists",
                slug
            )));
        }

        let display_order = match dto.display_order {
            Some(order) => order,
            None => {
                let (max_order,): (i32,) = sqlx::query_as(
                    "SELECT COALESCE(MAX(display_order), 0) FROM categories",
                )
                .fetch_one(&self.pool)
                .await?;
                max_order + 1
            }
        };

        let category = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (name, slug, subtitle, icon, description, display_order)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, slug, subtitle, icon, description, display_order, is_active, created_at, updated_at
            "#,
        )
        .bind(&dto.name)
        .bind(&slug)
        .bind(&dto.subtitle)
        .bind(&dto.icon)
        .bind(&dto.description)
        .bind(display_order)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!("Category created: id={}, slug={}", category.id, category.slug);

        Ok(category.into())
    }

    /// Patch a category. The slug is recomputed only when the name actually
    /// changes; a rename that collides with another category is rejected.
    pub async fn update(&self, id: Uuid, dto: UpdateCategoryDto) -> Result<CategoryResponseDto> {
        let existing = self.fetch(id).await?;

        let new_slug = match dto.name.as_deref() {
            Some(name) => slug_for_rename(&existing.name, name),
            None => None,
        };

        if let Some(slug) = &new_slug {
            if slug.is_empty() {
                return Err(AppError::Validation(
                    "name must contain at least one letter or digit".to_string(),
                ));
            }
            if *slug != existing.slug {
                let duplicate: Option<(Uuid,)> =
                    sqlx::query_as("SELECT id FROM categories WHERE slug = $1 AND id <> $2")
                        .bind(slug)
                        .bind(id)
                        .fetch_optional(&self.pool)
                        .await?;
                if duplicate.is_some() {
                    return Err(AppError::Conflict(format!(
                        "A category with the slug '{}' already exists",
                        slug
                    )));
                }
            }
        }

        let category = sqlx::query_as::<_, Category>(
            r#"
            UPDATE categories SET
                name = COALESCE($2, name),
                slug = COALESCE($3, slug),
                subtitle = COALESCE($4, subtitle),
                icon = COALESCE($5, icon),
                description = COALESCE($6, description),
                display_order = COALESCE($7, display_order),
                is_active = COALESCE($8, is_active),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, slug, subtitle, icon, description, display_order, is_active, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&dto.name)
        .bind(&new_slug)
        .bind(&dto.subtitle)
        .bind(&dto.icon)
        .bind(&dto.description)
        .bind(dto.display_order)
        .bind(dto.is_active)
        .fetch_one(&self.pool)
        .await?;

        Ok(category.into())
    }

    /// Delete a category. Blocked while it still owns events; cascades are
    /// never silent.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let category = self.fetch(id).await?;

        let (event_count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM events WHERE category_id = $1")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        if event_count > 0 {
            return Err(AppError::Conflict(format!(
                "Category '{}' still owns {} event(s) and cannot be deleted",
                category.name, event_count
            )));
        }

        sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        tracing::info!("Category deleted: id={}, slug={}", id, category.slug);

        Ok(())
    }

    async fn fetch(&self, id: Uuid) -> Result<Category> {
        sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, slug, subtitle, icon, description, display_order, is_active, created_at, updated_at
            FROM categories
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Category not found".to_string()))
    }
}
