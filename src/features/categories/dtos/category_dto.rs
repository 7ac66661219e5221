use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::categories::models::Category;
use crate::features::events::dtos::PublicEventDto;

/// Response DTO for a category (admin surface)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponseDto {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub subtitle: Option<String>,
    pub icon: Option<String>,
    pub description: Option<String>,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Category> for CategoryResponseDto {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            name: c.name,
            slug: c.slug,
            subtitle: c.subtitle,
            icon: c.icon,
            description: c.description,
            display_order: c.display_order,
            is_active: c.is_active,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

/// Category row joined with how many events it owns (admin listing)
#[derive(Debug, FromRow)]
pub struct CategoryWithEventCount {
    #[sqlx(flatten)]
    pub category: Category,
    pub event_count: i64,
}

/// Admin listing entry: category plus its event count
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AdminCategoryDto {
    #[serde(flatten)]
    pub category: CategoryResponseDto,
    pub event_count: i64,
}

impl From<CategoryWithEventCount> for AdminCategoryDto {
    fn from(row: CategoryWithEventCount) -> Self {
        Self {
            category: row.category.into(),
            event_count: row.event_count,
        }
    }
}

/// Public portfolio entry: active category with its active events and media
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PublicCategoryDto {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub subtitle: Option<String>,
    pub icon: Option<String>,
    pub description: Option<String>,
    pub display_order: i32,
    pub events: Vec<PublicEventDto>,
}

impl PublicCategoryDto {
    pub fn from_category(category: Category, events: Vec<PublicEventDto>) -> Self {
        Self {
            id: category.id,
            name: category.name,
            slug: category.slug,
            subtitle: category.subtitle,
            icon: category.icon,
            description: category.description,
            display_order: category.display_order,
            events,
        }
    }
}

/// Request DTO for creating a category
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryDto {
    /// Display name; the slug is derived from it server-side
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    pub subtitle: Option<String>,
    pub icon: Option<String>,
    pub description: Option<String>,
    /// Position in the public listing; appended after the last category when omitted
    pub display_order: Option<i32>,
}

/// Request DTO for updating a category; only supplied fields change
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateCategoryDto {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    pub subtitle: Option<String>,
    pub icon: Option<String>,
    pub description: Option<String>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

/// Response DTO for delete operations
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteCategoryResponseDto {
    pub deleted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_category() -> Category {
        Category {
            id: Uuid::parse_str("6a9f6bd2-7f29-4d7e-9c3a-222222222222").unwrap(),
            name: "Nuntă".to_string(),
            slug: "nunta".to_string(),
            subtitle: None,
            icon: Some("💍".to_string()),
            description: Some("Fotografii de nuntă".to_string()),
            display_order: 1,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_admin_dto_flattens_category_fields() {
        let dto = AdminCategoryDto {
            category: sample_category().into(),
            event_count: 3,
        };

        let value = serde_json::to_value(&dto).unwrap();
        // Category fields sit next to event_count, not nested under "category"
        assert_eq!(value["slug"], "nunta");
        assert_eq!(value["event_count"], 3);
        assert!(value.get("category").is_none());
    }
}
