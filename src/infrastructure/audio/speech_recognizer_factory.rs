use std::sync::Arc;

use crate::application::ports::{RecognitionError, SpeechRecognizer};
use crate::presentation::config::{RecognizerProvider, RecognizerSettings};

use super::google_speech_recognizer::GoogleSpeechRecognizer;
use super::mock_speech_recognizer::MockSpeechRecognizer;
use super::openai_whisper_recognizer::OpenAiWhisperRecognizer;

pub struct SpeechRecognizerFactory;

impl SpeechRecognizerFactory {
    pub fn create(
        settings: &RecognizerSettings,
    ) -> Result<Arc<dyn SpeechRecognizer>, RecognitionError> {
        match settings.provider {
            RecognizerProvider::Google => {
                let key = required_api_key(settings, "Google Speech")?;
                Ok(Arc::new(GoogleSpeechRecognizer::new(
                    key,
                    settings.base_url.clone(),
                )))
            }
            RecognizerProvider::OpenAi => {
                let key = required_api_key(settings, "OpenAI Whisper")?;
                Ok(Arc::new(OpenAiWhisperRecognizer::new(
                    key,
                    settings.base_url.clone(),
                    settings.model.clone(),
                )))
            }
            RecognizerProvider::Mock => {
                let transcript = settings.mock_transcript.clone().unwrap_or_default();
                Ok(Arc::new(MockSpeechRecognizer::new(transcript)))
            }
        }
    }
}

fn required_api_key(settings: &RecognizerSettings, provider: &str) -> Result<String, RecognitionError> {
    settings
        .api_key
        .clone()
        .filter(|key| !key.trim().is_empty())
        .ok_or_else(|| RecognitionError::Misconfigured(format!("API key required for {}", provider)))
}
