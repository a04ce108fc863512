pub mod config;
pub mod handlers;
pub mod router;
pub mod state;

pub use config::{Environment, RecognizerProvider, Settings};
pub use router::{AUDIO_TO_TEXT_PATH, create_router};
pub use state::AppState;
