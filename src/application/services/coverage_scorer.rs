use crate::application::ports::AnswerScorer;
use crate::domain::{ExpectedPhrase, ScoreReport, Transcript, WordCheck};

/// Counts a spoken word as right when it appears anywhere in the expected
/// phrase. Position and repetition are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoverageScorer;

impl AnswerScorer for CoverageScorer {
    fn score(&self, expected: &ExpectedPhrase, transcript: &Transcript) -> ScoreReport {
        let query = transcript
            .tokens()
            .into_iter()
            .map(|word| {
                let is_right = expected.contains(&word);
                WordCheck { word, is_right }
            })
            .collect();

        ScoreReport::from_checks(query, expected.token_count())
    }
}
