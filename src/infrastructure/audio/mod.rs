mod ffmpeg_transcoder;
mod google_speech_recognizer;
mod mock_speech_recognizer;
mod mock_transcoder;
mod openai_whisper_recognizer;
mod speech_recognizer_factory;

pub use ffmpeg_transcoder::{FfmpegTranscoder, check_ffmpeg_binary};
pub use google_speech_recognizer::GoogleSpeechRecognizer;
pub use mock_speech_recognizer::MockSpeechRecognizer;
pub use mock_transcoder::MockTranscoder;
pub use openai_whisper_recognizer::OpenAiWhisperRecognizer;
pub use speech_recognizer_factory::SpeechRecognizerFactory;
