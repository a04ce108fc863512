/// One ranked hypothesis returned by a speech recognizer.
#[derive(Debug, Clone, PartialEq)]
pub struct RecognitionAlternative {
    pub transcript: String,
    pub confidence: Option<f32>,
}

/// A consecutive stretch of recognized audio with its alternatives, best first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecognitionSegment {
    pub alternatives: Vec<RecognitionAlternative>,
}

impl RecognitionSegment {
    pub fn single(transcript: impl Into<String>) -> Self {
        Self {
            alternatives: vec![RecognitionAlternative {
                transcript: transcript.into(),
                confidence: None,
            }],
        }
    }

    pub fn top(&self) -> Option<&RecognitionAlternative> {
        self.alternatives.first()
    }
}
