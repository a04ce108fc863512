mod expected_phrase;
mod language_code;
mod media_path;
mod recognition;
mod score_report;
mod transcript;
mod upload_id;
mod validation_error;
mod waveform;

pub use expected_phrase::{ExpectedPhrase, normalize_expected};
pub use language_code::LanguageCode;
pub use media_path::{MediaPath, MediaPaths, sanitize_filename};
pub use recognition::{RecognitionAlternative, RecognitionSegment};
pub use score_report::{ScoreReport, WordCheck};
pub use transcript::Transcript;
pub use upload_id::UploadId;
pub use validation_error::ValidationError;
pub use waveform::{DEFAULT_SAMPLE_RATE_HZ, WaveformFormat};
