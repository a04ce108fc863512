use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};

use crate::application::ports::{RecognitionError, SpeechRecognizer};
use crate::domain::{LanguageCode, RecognitionAlternative, RecognitionSegment, WaveformFormat};

const DEFAULT_BASE_URL: &str = "https://speech.googleapis.com";

/// Google Cloud Speech-to-Text v1 synchronous `speech:recognize`.
pub struct GoogleSpeechRecognizer {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GoogleSpeechRecognizer {
    pub fn new(api_key: String, base_url: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
        }
    }
}

#[derive(Serialize)]
struct RecognizeRequest<'a> {
    config: RecognitionConfig<'a>,
    audio: RecognitionAudio,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RecognitionConfig<'a> {
    encoding: &'static str,
    sample_rate_hertz: u32,
    audio_channel_count: u8,
    language_code: &'a str,
}

#[derive(Serialize)]
struct RecognitionAudio {
    content: String,
}

#[derive(Deserialize)]
struct RecognizeResponse {
    #[serde(default)]
    results: Vec<RecognitionResult>,
}

#[derive(Deserialize)]
struct RecognitionResult {
    #[serde(default)]
    alternatives: Vec<Alternative>,
}

#[derive(Deserialize)]
struct Alternative {
    #[serde(default)]
    transcript: String,
    confidence: Option<f32>,
}

impl From<RecognitionResult> for RecognitionSegment {
    fn from(result: RecognitionResult) -> Self {
        Self {
            alternatives: result
                .alternatives
                .into_iter()
                .map(|alt| RecognitionAlternative {
                    transcript: alt.transcript,
                    confidence: alt.confidence,
                })
                .collect(),
        }
    }
}

#[async_trait]
impl SpeechRecognizer for GoogleSpeechRecognizer {
    async fn recognize(
        &self,
        waveform: &[u8],
        format: WaveformFormat,
        language: &LanguageCode,
    ) -> Result<Vec<RecognitionSegment>, RecognitionError> {
        let url = format!("{}/v1/speech:recognize", self.base_url);

        let body = RecognizeRequest {
            config: RecognitionConfig {
                encoding: WaveformFormat::RECOGNIZER_ENCODING,
                sample_rate_hertz: format.sample_rate_hz,
                audio_channel_count: WaveformFormat::CHANNELS,
                language_code: language.as_str(),
            },
            audio: RecognitionAudio {
                content: BASE64.encode(waveform),
            },
        };

        tracing::debug!(
            language = %language,
            bytes = waveform.len(),
            "Sending waveform to Google Speech"
        );

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| RecognitionError::ApiRequestFailed(format!("request: {}", e.without_url())))?;

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

        let result: RecognizeResponse = response
            .json()
            .await
            .map_err(|e| RecognitionError::InvalidResponse(format!("parse response: {}", e)))?;

        let segments: Vec<RecognitionSegment> =
            result.results.into_iter().map(Into::into).collect();

        tracing::info!(segments = segments.len(), "Google Speech recognition completed");

        Ok(segments)
    }
}
