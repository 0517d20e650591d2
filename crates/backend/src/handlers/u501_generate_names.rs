use axum::{extract::rejection::JsonRejection, http::StatusCode, Json};
use contracts::usecases::u501_generate_names::dto::{
    GenerateErrorResponse, GenerateNamesRequest, GenerateNamesResponse,
};

use crate::shared::llm;
use crate::usecases::u501_generate_names::{prepare, GenerateError, GenerateExecutor};

type ErrorReply = (StatusCode, Json<GenerateErrorResponse>);

fn error_reply(status: StatusCode, message: impl Into<String>) -> ErrorReply {
    (
        status,
        Json(GenerateErrorResponse {
            error: message.into(),
        }),
    )
}

impl From<GenerateError> for ErrorReply {
    fn from(e: GenerateError) -> Self {
        let status = match &e {
            GenerateError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            GenerateError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            GenerateError::Provider(_) | GenerateError::EmptyResult => StatusCode::BAD_GATEWAY,
        };
        error_reply(status, e.to_string())
    }
}

/// POST /api/generate
pub async fn generate(
    payload: Result<Json<GenerateNamesRequest>, JsonRejection>,
) -> Result<Json<GenerateNamesResponse>, ErrorReply> {
    let Json(request) = payload.map_err(|e| {
        tracing::warn!("Rejected generate request: {}", e);
        error_reply(StatusCode::BAD_REQUEST, e.body_text())
    })?;

    let prepared = prepare(request)?;

    let provider = llm::provider().ok_or(GenerateError::NotConfigured)?;
    match GenerateExecutor::new(provider).execute(prepared).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            tracing::error!("Name generation failed: {}", e);
            Err(e.into())
        }
    }
}
