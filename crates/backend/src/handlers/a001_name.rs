use axum::{
    extract::{rejection::QueryRejection, Query},
    http::StatusCode,
    Json,
};
use contracts::domain::a001_name::aggregate::NameRecord;
use serde::Deserialize;

use crate::domain::a001_name;

#[derive(Debug, Default, Deserialize)]
pub struct NamesQuery {
    pub category: Option<String>,
}

/// GET /api/names?category=<text>
///
/// Всегда 200: при любой ошибке, включая кривую строку запроса, отдаём пустой массив
pub async fn list_by_category(
    query: Result<Query<NamesQuery>, QueryRejection>,
) -> Json<Vec<NameRecord>> {
    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            tracing::warn!("Rejected names query: {}", rejection.body_text());
            return Json(Vec::new());
        }
    };

    match a001_name::service::fetch_names(query.category.as_deref()).await {
        Ok(v) => Json(v),
        Err(e) => {
            tracing::error!(
                "Failed to fetch names for category {:?}: {}",
                query.category,
                e
            );
            Json(Vec::new())
        }
    }
}

/// POST /api/names/testdata
pub async fn insert_test_data() -> StatusCode {
    match a001_name::service::insert_test_data().await {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::error!("Failed to insert sample names: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
