use async_trait::async_trait;

use crate::application::ports::{RecognitionError, SpeechRecognizer};
use crate::domain::{LanguageCode, RecognitionSegment, WaveformFormat};

/// Answers every request with the same transcript, one segment per line.
#[derive(Debug, Clone, Default)]
pub struct MockSpeechRecognizer {
    transcript: String,
}

impl MockSpeechRecognizer {
    pub fn new(transcript: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
        }
    }
}

#[async_trait]
impl SpeechRecognizer for MockSpeechRecognizer {
    async fn recognize(
        &self,
        _waveform: &[u8],
        _format: WaveformFormat,
        _language: &LanguageCode,
    ) -> Result<Vec<RecognitionSegment>, RecognitionError> {
        Ok(self
            .transcript
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(RecognitionSegment::single)
            .collect())
    }
}
