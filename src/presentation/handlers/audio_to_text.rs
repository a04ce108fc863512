use std::io;

use axum::extract::multipart::MultipartRejection;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Multipart, Query, State};
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use futures::{StreamExt, TryStreamExt};
use serde::{Deserialize, Serialize};

use crate::application::services::DictationRequest;
use crate::domain::{
    ExpectedPhrase, LanguageCode, ScoreReport, UploadId, ValidationError, WordCheck,
};
use crate::infrastructure::observability::{RequestId, preview_for_log};
use crate::presentation::handlers::error::ApiError;
use crate::presentation::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AudioToTextParams {
    pub language: Option<String>,
    pub message: Option<String>,
}

#[derive(Serialize)]
pub struct ScoreResponse {
    pub distance: f64,
    pub ratio: f64,
    pub is_match: bool,
    pub query: Vec<WordCheckResponse>,
}

#[derive(Serialize)]
pub struct WordCheckResponse {
    pub word: String,
    pub is_right: bool,
}

impl From<ScoreReport> for ScoreResponse {
    fn from(report: ScoreReport) -> Self {
        Self {
            distance: report.distance,
            ratio: report.ratio,
            is_match: report.is_match,
            query: report
                .query
                .into_iter()
                .map(|WordCheck { word, is_right }| WordCheckResponse { word, is_right })
                .collect(),
        }
    }
}

#[tracing::instrument(skip_all, fields(request_id = %request_id.as_str()))]
pub async fn audio_to_text_handler(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    params: Result<Query<AudioToTextParams>, QueryRejection>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    match check_answer(state, params, multipart).await {
        Ok(response) => Json(response).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, status = %e.status(), "Audio check rejected");
            e.into_response()
        }
    }
}

async fn check_answer(
    state: AppState,
    params: Result<Query<AudioToTextParams>, QueryRejection>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<ScoreResponse, ApiError> {
    let Query(params) = params.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let (language, expected) = validate_params(params)?;

    tracing::debug!(
        language = %language,
        message = %preview_for_log(expected.raw()),
        expected_words = expected.token_count(),
        "Validated audio check parameters"
    );

    let mut multipart =
        multipart.map_err(|e| ApiError::BadRequest(format!("Invalid upload: {}", e.body_text())))?;

    // The first part that carries a filename is the upload; other parts are skipped.
    let field = loop {
        match multipart.next_field().await {
            Ok(Some(field)) if field.file_name().is_some() => break field,
            Ok(Some(field)) => {
                tracing::debug!(field = field.name().unwrap_or_default(), "Skipping non-file field");
            }
            Ok(None) => return Err(ApiError::BadRequest("No file uploaded".to_string())),
            Err(e) => return Err(ApiError::Multipart(e)),
        }
    };

    let filename = field.file_name().unwrap_or("upload").to_string();
    tracing::debug!(
        filename = %preview_for_log(&filename),
        field = field.name().unwrap_or_default(),
        content_type = field.content_type().unwrap_or("application/octet-stream"),
        "Receiving upload"
    );

    let upload = field.map_err(io::Error::other).boxed();

    let outcome = state
        .dictation_service
        .check_answer(
            UploadId::new(),
            DictationRequest {
                filename,
                upload,
                language,
                expected,
            },
        )
        .await?;

    Ok(outcome.report.into())
}

fn validate_params(
    params: AudioToTextParams,
) -> Result<(LanguageCode, ExpectedPhrase), ApiError> {
    let language = params
        .language
        .ok_or_else(|| ApiError::BadRequest("Missing query parameter: language".to_string()))?;
    let message = params
        .message
        .ok_or_else(|| ApiError::BadRequest("Missing query parameter: message".to_string()))?;

    let language = LanguageCode::parse(&language).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let expected = ExpectedPhrase::parse(&message).map_err(|e| match e {
        ValidationError::EmptyExpectedPhrase => ApiError::DegenerateInput(e.to_string()),
        other => ApiError::BadRequest(other.to_string()),
    })?;

    Ok((language, expected))
}
