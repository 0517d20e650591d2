use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::handlers;

/// Конфигурация всех роутов приложения
pub fn configure_routes(static_dir: &str) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // NAMES
        // ========================================
        .route("/api/names", get(handlers::a001_name::list_by_category))
        .route(
            "/api/names/testdata",
            post(handlers::a001_name::insert_test_data),
        )
        .route("/api/categories", get(handlers::a002_category::list_all))
        // ========================================
        // GENERATOR
        // ========================================
        .route(
            "/api/generate",
            post(handlers::u501_generate_names::generate),
        )
        // Собранный frontend отдаётся с того же origin
        .fallback_service(ServeDir::new(static_dir))
}
