//! Dictionary records

use serde::{Deserialize, Serialize};

/// A stored dictionary entry
///
/// Row shape of the `terms` table. `word` is unique across the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Term {
    pub id: i64,
    pub word: String,
    /// Kana reading, used only as a sort/group key
    pub reading: Option<String>,
    pub description: String,
    pub image_url: Option<String>,
}

impl Term {
    /// Reading with surrounding whitespace removed, `None` when absent or blank
    pub fn trimmed_reading(&self) -> Option<&str> {
        self.reading
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
    }
}

/// Payload for registering a new term
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTerm {
    pub word: String,
    #[serde(default)]
    pub reading: Option<String>,
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl NewTerm {
    pub fn new(word: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            reading: None,
            description: description.into(),
            image_url: None,
        }
    }

    pub fn with_reading(mut self, reading: impl Into<String>) -> Self {
        self.reading = Some(reading.into());
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Reject payloads the store must never persist
    pub fn validate(&self) -> crate::Result<()> {
        if self.word.trim().is_empty() {
            return Err(crate::Error::InvalidInput("word must not be blank".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn term(reading: Option<&str>) -> Term {
        Term {
            id: 1,
            word: "犬".to_string(),
            reading: reading.map(str::to_string),
            description: "動物".to_string(),
            image_url: None,
        }
    }

    #[test]
    fn test_trimmed_reading() {
        assert_eq!(term(Some(" いぬ ")).trimmed_reading(), Some("いぬ"));
        assert_eq!(term(Some("   ")).trimmed_reading(), None);
        assert_eq!(term(Some("")).trimmed_reading(), None);
        assert_eq!(term(None).trimmed_reading(), None);
    }

    #[test]
    fn test_new_term_optional_fields_default_to_none() {
        let parsed: NewTerm =
            serde_json::from_str(r#"{"word":"犬","description":"動物"}"#).unwrap();
        assert_eq!(parsed, NewTerm::new("犬", "動物"));
    }

    #[test]
    fn test_validate_rejects_blank_word() {
        assert!(NewTerm::new("  ", "説明").validate().is_err());
        assert!(NewTerm::new("犬", "").validate().is_ok());
    }
}
