use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{TranscodeError, Transcoder};
use crate::domain::WaveformFormat;

const STDERR_TAIL_LINES: usize = 5;

/// Runs the `ffmpeg` binary to pull a mono PCM waveform out of any media file.
pub struct FfmpegTranscoder {
    binary: String,
    format: WaveformFormat,
}

impl FfmpegTranscoder {
    pub fn new(binary: impl Into<String>, format: WaveformFormat) -> Self {
        Self {
            binary: binary.into(),
            format,
        }
    }

    fn output_args(&self) -> Vec<String> {
        vec![
            "-acodec".to_string(),
            WaveformFormat::CODEC.to_string(),
            "-vn".to_string(),
            "-ac".to_string(),
            WaveformFormat::CHANNELS.to_string(),
            "-ar".to_string(),
            self.format.sample_rate_hz.to_string(),
        ]
    }
}

#[async_trait]
impl Transcoder for FfmpegTranscoder {
    async fn transcode(&self, input: &Path, output: &Path) -> Result<(), TranscodeError> {
        if !tokio::fs::try_exists(input).await.unwrap_or(false) {
            return Err(TranscodeError::InputMissing(input.display().to_string()));
        }

        tracing::debug!(
            input = %input.display(),
            output = %output.display(),
            sample_rate_hz = self.format.sample_rate_hz,
            "Running ffmpeg"
        );

        let result = Command::new(&self.binary)
            .args(["-hide_banner", "-nostdin", "-y", "-i"])
            .arg(input)
            .args(self.output_args())
            .arg(output)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => {
                    TranscodeError::Unavailable(format!("{}: {}", self.binary, e))
                }
                _ => TranscodeError::Failed(format!("spawn: {}", e)),
            })?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(TranscodeError::Failed(format!(
                "ffmpeg exited with {}: {}",
                result.status,
                stderr_tail(&stderr)
            )));
        }

        tracing::info!(output = %output.display(), "Waveform extracted");
        Ok(())
    }

    fn format(&self) -> WaveformFormat {
        self.format
    }
}

/// Confirms the configured binary can be executed.
pub async fn check_ffmpeg_binary(binary: &str) -> Result<(), TranscodeError> {
    let status = Command::new(binary)
        .arg("-version")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await
        .map_err(|e| TranscodeError::Unavailable(format!("{}: {}", binary, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(TranscodeError::Unavailable(format!(
            "{} -version exited with {}",
            binary, status
        )))
    }
}

fn stderr_tail(stderr: &str) -> String {
    let lines: Vec<&str> = stderr.lines().filter(|l| !l.trim().is_empty()).collect();
    let start = lines.len().saturating_sub(STDERR_TAIL_LINES);
    lines[start..].join(" | ")
}
