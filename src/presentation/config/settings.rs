use std::time::Duration;

use config::{Config, ConfigError, File};
use serde::Deserialize;

use crate::application::services::StageTimeouts;
use crate::domain::{DEFAULT_SAMPLE_RATE_HZ, WaveformFormat};

use super::Environment;

const DEFAULT_MAX_UPLOAD_SIZE_BYTES: i64 = 50 * 1024 * 1024;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub logging: LoggingSettings,
    pub storage: StorageSettings,
    pub transcoder: TranscoderSettings,
    pub recognizer: RecognizerSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub scratch_path: String,
    pub max_upload_size_bytes: usize,
    pub receive_timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscoderSettings {
    pub ffmpeg_binary: String,
    pub sample_rate_hz: u32,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecognizerSettings {
    pub provider: RecognizerProvider,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub timeout_seconds: u64,
    pub mock_transcript: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecognizerProvider {
    Google,
    #[serde(rename = "openai")]
    OpenAi,
    Mock,
}

impl Settings {
    /// Layers built-in defaults, `appsettings.{environment}` and `APP_`
    /// prefixed environment variables (`APP_RECOGNIZER__API_KEY`), last wins.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        let file_name = format!("appsettings.{}", environment.as_str());

        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000_i64)?
            .set_default("logging.level", "info,phrasecheck=debug,tower_http=debug")?
            .set_default("logging.enable_json", false)?
            .set_default("storage.scratch_path", default_scratch_path())?
            .set_default("storage.max_upload_size_bytes", DEFAULT_MAX_UPLOAD_SIZE_BYTES)?
            .set_default("storage.receive_timeout_seconds", 60_i64)?
            .set_default("transcoder.ffmpeg_binary", "ffmpeg")?
            .set_default("transcoder.sample_rate_hz", i64::from(DEFAULT_SAMPLE_RATE_HZ))?
            .set_default("transcoder.timeout_seconds", 60_i64)?
            .set_default("recognizer.provider", "google")?
            .set_default("recognizer.timeout_seconds", 60_i64)?
            .add_source(File::with_name(&file_name).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }

    pub fn stage_timeouts(&self) -> StageTimeouts {
        StageTimeouts {
            receive: Duration::from_secs(self.storage.receive_timeout_seconds),
            transcode: Duration::from_secs(self.transcoder.timeout_seconds),
            recognize: Duration::from_secs(self.recognizer.timeout_seconds),
        }
    }

    pub fn waveform_format(&self) -> WaveformFormat {
        WaveformFormat::new(self.transcoder.sample_rate_hz)
    }
}

fn default_scratch_path() -> String {
    std::env::temp_dir()
        .join("phrasecheck")
        .to_string_lossy()
        .into_owned()
}
