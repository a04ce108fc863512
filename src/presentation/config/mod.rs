mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    LoggingSettings, RecognizerProvider, RecognizerSettings, ServerSettings, Settings,
    StorageSettings, TranscoderSettings,
};
