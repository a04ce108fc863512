use std::fmt;

use super::upload_id::UploadId;

const WAVEFORM_FILENAME: &str = "waveform.wav";
const FALLBACK_FILENAME: &str = "upload";

/// Location of a scratch file relative to the media store root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaPath(String);

impl MediaPath {
    pub fn new(upload_id: &UploadId, filename: &str) -> Self {
        Self(format!("{}/{}", upload_id.as_uuid(), filename))
    }

    pub fn from_raw(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The leading directory segment, if any.
    pub fn directory(&self) -> Option<&str> {
        self.0.split_once('/').map(|(dir, _)| dir)
    }
}

impl fmt::Display for MediaPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The pair of scratch files one request works with. Both live under a
/// directory named after the upload id, so concurrent requests never share a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaPaths {
    pub upload: MediaPath,
    pub waveform: MediaPath,
}

impl MediaPaths {
    pub fn new(upload_id: &UploadId, client_filename: &str) -> Self {
        let upload_name = format!("source-{}", sanitize_filename(client_filename));

        Self {
            upload: MediaPath::new(upload_id, &upload_name),
            waveform: MediaPath::new(upload_id, WAVEFORM_FILENAME),
        }
    }

    pub fn all(&self) -> [&MediaPath; 2] {
        [&self.upload, &self.waveform]
    }
}

/// Reduces a client supplied filename to a single safe path segment.
pub fn sanitize_filename(raw: &str) -> String {
    let last_segment = raw.rsplit(['/', '\\']).next().unwrap_or_default();

    let cleaned: String = last_segment
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    let trimmed = cleaned.trim_start_matches('.');
    if trimmed.is_empty() {
        FALLBACK_FILENAME.to_string()
    } else {
        trimmed.to_string()
    }
}
