use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::categories::dtos::CategoryResponseDto;
use crate::features::events::dtos::EventResponseDto;
use crate::features::media::dtos::MediaResponseDto;

/// Entity counts shown on the admin landing page
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DashboardStatsDto {
    pub categories: i64,
    pub events: i64,
    pub media: i64,
}

/// Most recently created records per entity
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DashboardRecentDto {
    pub categories: Vec<CategoryResponseDto>,
    pub events: Vec<EventResponseDto>,
    pub media: Vec<MediaResponseDto>,
}

/// Full admin dashboard payload
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DashboardSummaryDto {
    pub stats: DashboardStatsDto,
    pub recent: DashboardRecentDto,
}
