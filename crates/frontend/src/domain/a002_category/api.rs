use crate::shared::api_utils::api_url;
use contracts::domain::a002_category::aggregate::{fallback_categories, CategoryGroup};
use gloo_net::http::Request;

/// Category groups for the home page
pub async fn list_categories() -> Result<Vec<CategoryGroup>, String> {
    let response = Request::get(&api_url("/api/categories"))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Same as [`list_categories`], with the built-in list on any failure
pub async fn list_categories_or_fallback() -> Vec<CategoryGroup> {
    match list_categories().await {
        Ok(groups) => groups,
        Err(e) => {
            log::warn!("categories: {}", e);
            fallback_categories()
        }
    }
}
