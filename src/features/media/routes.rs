use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post, put},
    Router,
};

use crate::features::media::handlers;
use crate::features::media::services::MediaService;

/// Admin routes (wrapped by the session gate in main)
///
/// The upload route gets its own body limit: a batch may carry several files,
/// so the cap is a small multiple of the per-file ceiling plus multipart
/// overhead. The per-file limit itself is enforced by the pipeline.
pub fn admin_routes(service: Arc<MediaService>, max_file_size: usize) -> Router {
    Router::new()
        .route(
            "/api/admin/media/upload",
            post(handlers::upload_media)
                .layer(DefaultBodyLimit::max(max_file_size.saturating_mul(4) + 1024 * 1024)),
        )
        .route("/api/admin/media", get(handlers::list_media))
        .route(
            "/api/admin/media/{id}",
            put(handlers::update_media).delete(handlers::delete_media),
        )
        .with_state(service)
}
