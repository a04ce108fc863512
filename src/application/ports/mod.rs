mod answer_scorer;
mod media_store;
mod speech_recognizer;
mod transcoder;

pub use answer_scorer::AnswerScorer;
pub use media_store::{MediaStore, MediaStoreError};
pub use speech_recognizer::{RecognitionError, SpeechRecognizer};
pub use transcoder::{TranscodeError, Transcoder};
