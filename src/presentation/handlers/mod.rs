mod audio_to_text;
mod error;
mod health;

pub use audio_to_text::{AudioToTextParams, ScoreResponse, WordCheckResponse, audio_to_text_handler};
pub use error::{ApiError, ErrorResponse, method_not_allowed_handler};
pub use health::health_handler;
