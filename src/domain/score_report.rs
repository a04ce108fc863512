#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCheck {
    pub word: String,
    pub is_right: bool,
}

/// Outcome of comparing a transcript against the expected phrase.
///
/// `ratio` is the number of correct spoken words over the number of expected
/// words, `distance` is `100 - ratio * 100`, and `is_match` holds when the
/// correct count equals the expected word count.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreReport {
    pub distance: f64,
    pub ratio: f64,
    pub is_match: bool,
    pub query: Vec<WordCheck>,
}

impl ScoreReport {
    pub fn from_checks(query: Vec<WordCheck>, expected_token_count: usize) -> Self {
        let correct = query.iter().filter(|c| c.is_right).count();

        let ratio = if expected_token_count == 0 {
            0.0
        } else {
            correct as f64 / expected_token_count as f64
        };

        Self {
            distance: 100.0 - ratio * 100.0,
            ratio,
            is_match: expected_token_count > 0 && correct == expected_token_count,
            query,
        }
    }

    pub fn correct_count(&self) -> usize {
        self.query.iter().filter(|c| c.is_right).count()
    }
}
