use std::fmt;

use super::validation_error::ValidationError;

const MAX_LANGUAGE_CODE_LEN: usize = 35;

/// A BCP-47 style locale tag handed to the speech recognizer, e.g. `es-ES`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageCode(String);

impl LanguageCode {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();

        let well_formed = !trimmed.is_empty()
            && trimmed.len() <= MAX_LANGUAGE_CODE_LEN
            && trimmed
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

        if !well_formed {
            return Err(ValidationError::InvalidLanguageCode(raw.to_string()));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The language part of the tag (`es` for `es-ES`), lowercased.
    pub fn primary_subtag(&self) -> String {
        self.0
            .split(['-', '_'])
            .next()
            .unwrap_or(&self.0)
            .to_ascii_lowercase()
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
