use std::sync::LazyLock;

use regex::Regex;

use super::validation_error::ValidationError;

// Dashes are only removed when followed by a space so hyphenated words stay whole.
// `â€“` is an en dash mis-decoded as Windows-1252.
static STRIPPED_PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.|\?|!|- |– |â€“ ").unwrap());

/// The phrase the speaker was asked to say, normalized into comparison tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedPhrase {
    raw: String,
    tokens: Vec<String>,
}

impl ExpectedPhrase {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let tokens = tokenize(&normalize_expected(raw));

        if tokens.is_empty() {
            return Err(ValidationError::EmptyExpectedPhrase);
        }

        Ok(Self {
            raw: raw.to_string(),
            tokens,
        })
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }
}

/// Lowercases and removes sentence punctuation from an expected phrase.
pub fn normalize_expected(raw: &str) -> String {
    STRIPPED_PUNCTUATION
        .replace_all(&raw.to_lowercase(), "")
        .into_owned()
}

/// Splits on single spaces only. Other whitespace, including the newlines
/// between transcript segments, stays inside a token. Empty pieces from
/// repeated spaces are dropped.
pub(crate) fn tokenize(normalized: &str) -> Vec<String> {
    normalized
        .split(' ')
        .filter(|piece| !piece.is_empty())
        .map(String::from)
        .collect()
}
