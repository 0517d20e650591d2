use crate::shared::api_utils::api_url;
use contracts::domain::a001_name::aggregate::NameRecord;
use contracts::domain::a001_name::validation::parse_name_records;
use contracts::domain::a002_category::query::CategoryQuery;

/// Names for a category. Never fails: transport, HTTP and parse errors are
/// logged and become an empty list. A blank category makes no request.
pub async fn fetch_names(category: &str) -> Vec<NameRecord> {
    let Some(query) = CategoryQuery::new(category) else {
        return Vec::new();
    };
    match fetch_names_body(&query).await {
        Ok(body) => parse_name_records(&body),
        Err(e) => {
            log::warn!("fetch names for '{}' failed: {}", query, e);
            Vec::new()
        }
    }
}

fn names_url(query: &CategoryQuery) -> String {
    api_url(&format!(
        "/api/names?category={}",
        urlencoding::encode(query.as_str())
    ))
}

async fn fetch_names_body(query: &CategoryQuery) -> Result<String, String> {
    use wasm_bindgen::JsCast;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let url = names_url(query);
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    text.as_string().ok_or_else(|| "bad text".to_string())
}
