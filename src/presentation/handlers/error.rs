use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::MediaStoreError;
use crate::application::services::DictationError;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Every way a dictation request can fail, each with its own status code.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("method not allowed, use POST")]
    MethodNotAllowed,
    #[error("{0}")]
    DegenerateInput(String),
    #[error("failed to read upload: {}", .0.body_text())]
    Multipart(#[from] MultipartError),
    #[error(transparent)]
    Dictation(#[from] DictationError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::DegenerateInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Multipart(e) => e.status(),
            ApiError::Dictation(e) => dictation_status(e),
        }
    }
}

fn dictation_status(error: &DictationError) -> StatusCode {
    match error {
        DictationError::EmptyUpload => StatusCode::BAD_REQUEST,
        DictationError::Storage(MediaStoreError::Io(io)) => io
            .get_ref()
            .and_then(|inner| inner.downcast_ref::<MultipartError>())
            .map(MultipartError::status)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        DictationError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        DictationError::Transcode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        DictationError::Recognition(_) => StatusCode::BAD_GATEWAY,
        DictationError::Timeout(..) => StatusCode::GATEWAY_TIMEOUT,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        if status == StatusCode::METHOD_NOT_ALLOWED {
            return (status, [(header::ALLOW, "POST")], body).into_response();
        }
        (status, body).into_response()
    }
}

pub async fn method_not_allowed_handler() -> ApiError {
    ApiError::MethodNotAllowed
}
