use std::path::Path;

use async_trait::async_trait;

use crate::application::ports::{TranscodeError, Transcoder};
use crate::domain::WaveformFormat;

/// Copies the input unchanged to the output path.
#[derive(Debug, Default)]
pub struct MockTranscoder;

#[async_trait]
impl Transcoder for MockTranscoder {
    async fn transcode(&self, input: &Path, output: &Path) -> Result<(), TranscodeError> {
        tokio::fs::copy(input, output)
            .await
            .map(|_| ())
            .map_err(|e| TranscodeError::Failed(format!("copy: {}", e)))
    }

    fn format(&self) -> WaveformFormat {
        WaveformFormat::default()
    }
}
