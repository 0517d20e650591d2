use crate::shared::api_utils::api_url;
use contracts::usecases::u501_generate_names::dto::{
    GenerateErrorResponse, GenerateNamesRequest, GenerateNamesResponse,
};
use gloo_net::http::Request;

/// API клиент для UseCase u501. Ошибки сервера приходят в поле `error`.
pub async fn generate_names(request: &GenerateNamesRequest) -> Result<Vec<String>, String> {
    let response = Request::post(&api_url("/api/generate"))
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        let status = response.status();
        return Err(match response.json::<GenerateErrorResponse>().await {
            Ok(body) => body.error,
            Err(_) => format!("Failed to generate names (HTTP {})", status),
        });
    }

    let body: GenerateNamesResponse = response
        .json()
        .await
        .map_err(|e| format!("Invalid response format from server: {}", e))?;
    Ok(body.names)
}
