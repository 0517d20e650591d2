use axum::Json;
use contracts::domain::a002_category::aggregate::CategoryGroup;

use crate::domain::a002_category;

/// GET /api/categories
pub async fn list_all() -> Json<Vec<CategoryGroup>> {
    Json(a002_category::service::list_categories().await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_category::aggregate::fallback_categories;

    #[tokio::test]
    async fn falls_back_without_database() {
        let Json(groups) = list_all().await;
        assert_eq!(groups, fallback_categories());
    }
}
