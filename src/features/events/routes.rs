use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::events::handlers;
use crate::features::events::services::EventService;

/// Admin routes (wrapped by the session gate in main)
pub fn admin_routes(service: Arc<EventService>) -> Router {
    Router::new()
        .route(
            "/api/admin/events",
            post(handlers::create_event).get(handlers::list_events),
        )
        .route(
            "/api/admin/events/{id}",
            get(handlers::get_event)
                .put(handlers::update_event)
                .delete(handlers::delete_event),
        )
        .with_state(service)
}
