use std::path::Path;

use async_trait::async_trait;

use crate::domain::WaveformFormat;

/// Extracts the audio track of an arbitrary media file into a waveform file.
#[async_trait]
pub trait Transcoder: Send + Sync {
    async fn transcode(&self, input: &Path, output: &Path) -> Result<(), TranscodeError>;

    fn format(&self) -> WaveformFormat;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscodeError {
    #[error("input file missing: {0}")]
    InputMissing(String),
    #[error("transcoder unavailable: {0}")]
    Unavailable(String),
    #[error("transcoding failed: {0}")]
    Failed(String),
}
