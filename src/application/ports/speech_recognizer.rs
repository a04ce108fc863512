use async_trait::async_trait;

use crate::domain::{LanguageCode, RecognitionSegment, WaveformFormat};

#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    /// Recognizes speech in a WAV encoded waveform. Segments come back in
    /// audio order with their alternatives ranked best first.
    async fn recognize(
        &self,
        waveform: &[u8],
        format: WaveformFormat,
        language: &LanguageCode,
    ) -> Result<Vec<RecognitionSegment>, RecognitionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RecognitionError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("unexpected response: {0}")]
    InvalidResponse(String),
    #[error("recognizer misconfigured: {0}")]
    Misconfigured(String),
}
