use async_trait::async_trait;
use reqwest::multipart;
use serde::Deserialize;

use crate::application::ports::{RecognitionError, SpeechRecognizer};
use crate::domain::{LanguageCode, RecognitionSegment, WaveformFormat};

pub struct OpenAiWhisperRecognizer {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiWhisperRecognizer {
    pub fn new(api_key: String, base_url: Option<String>, model: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url.unwrap_or_else(|| "https://api.openai.com/v1".to_string()),
            model: model.unwrap_or_else(|| "whisper-1".to_string()),
        }
    }
}

#[derive(Deserialize)]
struct WhisperResponse {
    text: String,
}

#[async_trait]
impl SpeechRecognizer for OpenAiWhisperRecognizer {
    async fn recognize(
        &self,
        waveform: &[u8],
        _format: WaveformFormat,
        language: &LanguageCode,
    ) -> Result<Vec<RecognitionSegment>, RecognitionError> {
        let url = format!("{}/audio/transcriptions", self.base_url.trim_end_matches('/'));

        let file_part = multipart::Part::bytes(waveform.to_vec())
            .file_name("audio.wav")
            .mime_str("audio/wav")
            .map_err(|e| RecognitionError::ApiRequestFailed(format!("mime: {}", e)))?;

        // Whisper takes ISO-639-1 codes only.
        let form = multipart::Form::new()
            .text("model", self.model.clone())
            .text("language", language.primary_subtag())
            .text("response_format", "json")
            .part("file", file_part);

        tracing::debug!(model = %self.model, language = %language, "Sending waveform to OpenAI Whisper API");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| RecognitionError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(RecognitionError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let result: WhisperResponse = response
            .json()
            .await
            .map_err(|e| RecognitionError::InvalidResponse(format!("parse response: {}", e)))?;

        let text = result.text.trim();
        tracing::info!(chars = text.len(), "OpenAI Whisper recognition completed");

        if text.is_empty() {
            return Ok(Vec::new());
        }
        Ok(vec![RecognitionSegment::single(text)])
    }
}
