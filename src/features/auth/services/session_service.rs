use sqlx::PgPool;

use crate::core::error::Result;
use crate::features::auth::model::{AdminSession, SessionRow};

/// Looks up admin sessions issued by the external auth provider.
///
/// This service never creates or refreshes sessions; the handshake lives
/// outside this backend. A token either resolves to a live row or it does
/// not, and that is the entire authorization model.
pub struct SessionService {
    pool: PgPool,
}

impl SessionService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Resolve a bearer token to a session, if one is live.
    ///
    /// Expired rows are treated as absent, not as an error.
    pub async fn current_session(&self, token: &str) -> Result<Option<AdminSession>> {
        let row = sqlx::query_as::<_, SessionRow>(
            r#"
            SELECT id, token, label, expires_at, created_at
            FROM admin_sessions
            WHERE token = $1
              AND (expires_at IS NULL OR expires_at > NOW())
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(AdminSession::from))
    }
}
