#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("expected phrase has no words to compare against")]
    EmptyExpectedPhrase,
    #[error("invalid language code: {0:?}")]
    InvalidLanguageCode(String),
}
