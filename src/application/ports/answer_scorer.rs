use crate::domain::{ExpectedPhrase, ScoreReport, Transcript};

/// Compares what was said against what should have been said.
pub trait AnswerScorer: Send + Sync {
    fn score(&self, expected: &ExpectedPhrase, transcript: &Transcript) -> ScoreReport;
}
