use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::categories::handlers;
use crate::features::categories::services::CategoryService;

/// Public portfolio routes (no authentication required)
pub fn public_routes(service: Arc<CategoryService>) -> Router {
    Router::new()
        .route("/api/categories", get(handlers::list_categories))
        .route("/api/categories/{slug}", get(handlers::get_category))
        .with_state(service)
}

/// Admin routes (wrapped by the session gate in main)
pub fn admin_routes(service: Arc<CategoryService>) -> Router {
    Router::new()
        .route(
            "/api/admin/categories",
            post(handlers::create_category).get(handlers::list_categories_admin),
        )
        .route(
            "/api/admin/categories/{id}",
            get(handlers::get_category_admin)
                .put(handlers::update_category)
                .delete(handlers::delete_category),
        )
        .with_state(service)
}
