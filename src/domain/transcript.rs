use super::expected_phrase::tokenize;
use super::recognition::RecognitionSegment;

/// Text recognized from the speaker's audio.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Transcript(String);

impl Transcript {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Joins the top alternative of every segment with newlines. Segments
    /// without alternatives contribute nothing.
    pub fn from_segments(segments: &[RecognitionSegment]) -> Self {
        let text = segments
            .iter()
            .filter_map(RecognitionSegment::top)
            .map(|alt| alt.transcript.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Lowercased spoken tokens. Punctuation is left untouched.
    pub fn tokens(&self) -> Vec<String> {
        tokenize(&self.0.to_lowercase())
    }
}
