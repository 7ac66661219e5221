use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// An active admin session, injected into request extensions by the access
/// gate. Handlers only ever check for its presence; the session carries no
/// role or permission detail beyond "is staff".
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdminSession {
    pub id: Uuid,
    /// Optional operator label set when the session was issued
    pub label: Option<String>,
}

/// Database row for an issued session token
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct SessionRow {
    pub id: Uuid,
    pub token: String,
    pub label: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<SessionRow> for AdminSession {
    fn from(row: SessionRow) -> Self {
        Self {
            id: row.id,
            label: row.label,
        }
    }
}
