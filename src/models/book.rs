// file: src/models/book.rs
// description: book record model and document-boundary sanitization
// reference: internal data structures

use crate::tags::converter::parse_genre;
use crate::utils::validation::Validator;
use serde::{Deserialize, Serialize};

/// One catalog entry as exposed to the rest of the crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Book {
    pub title: String,
    pub author: String,
    /// May be a "/"-delimited composite such as "English / French"
    pub language: String,
    pub goodreads: String,
    pub tags: Vec<String>,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        language: impl Into<String>,
        goodreads: impl Into<String>,
        tags: Vec<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            language: language.into(),
            goodreads: goodreads.into(),
            tags,
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn is_multi_language(&self) -> bool {
        self.language.contains('/')
    }

    /// Language tokens with the "/" composite split apart. Empty tokens
    /// (from "English /" or a missing Language) are kept.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.language.split('/').map(str::trim)
    }
}

/// Loosely typed shape of one document entry, before sanitization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawBookRecord {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub goodreads: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    /// Legacy single-string genre field, superseded by `Tags`
    #[serde(default)]
    pub genre: Option<String>,
}

impl RawBookRecord {
    pub fn sanitize(self) -> Result<Book, String> {
        let title = self
            .title
            .as_deref()
            .map(Validator::sanitize_text)
            .unwrap_or_default();

        if title.is_empty() {
            return Err("missing Title".to_string());
        }

        let tags = match (self.tags, self.genre) {
            (Some(tags), _) => tags
                .iter()
                .map(|tag| Validator::sanitize_text(tag))
                .filter(|tag| !tag.is_empty())
                .collect(),
            (None, Some(genre)) => parse_genre(&genre),
            (None, None) => Vec::new(),
        };

        Ok(Book {
            title,
            author: clean(self.author),
            language: trimmed(self.language),
            goodreads: trimmed(self.goodreads),
            tags,
        })
    }
}

fn clean(field: Option<String>) -> String {
    field
        .as_deref()
        .map(Validator::sanitize_text)
        .unwrap_or_default()
}

/// Language is matched and faceted on its raw value, so only the ends go.
fn trimmed(field: Option<String>) -> String {
    field.map(|f| f.trim().to_string()).unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedRecord {
    pub index: usize,
    pub reason: String,
}

/// Outcome of sanitizing a whole document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub accepted: usize,
    pub rejected: Vec<RejectedRecord>,
}

impl LoadReport {
    pub fn total(&self) -> usize {
        self.accepted + self.rejected.len()
    }

    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_book_serializes_with_pascal_case_fields() {
        let book = Book::new(
            "Dune",
            "Frank Herbert",
            "English",
            "https://www.goodreads.com/book/show/44767458-dune",
            vec!["Sci-Fi".to_string()],
        );
        let json = serde_json::to_value(&book).unwrap();

        assert_eq!(json["Title"], "Dune");
        assert_eq!(json["Author"], "Frank Herbert");
        assert_eq!(json["Tags"][0], "Sci-Fi");
    }

    #[test]
    fn test_languages_split_and_trim() {
        let book = Book::new("Le Petit Prince", "Saint-Exupéry", "English / French", "", vec![]);
        assert_eq!(book.languages().collect::<Vec<_>>(), vec!["English", "French"]);
        assert!(book.is_multi_language());
    }

    #[test]
    fn test_languages_keep_empty_tokens() {
        let trailing = Book::new("Dune", "Frank Herbert", "English /", "", vec![]);
        assert_eq!(trailing.languages().collect::<Vec<_>>(), vec!["English", ""]);

        let missing = Book::new("Emma", "Jane Austen", "", "", vec![]);
        assert_eq!(missing.languages().collect::<Vec<_>>(), vec![""]);
    }

    #[test]
    fn test_sanitize_keeps_inner_language_spacing() {
        let raw: RawBookRecord = serde_json::from_str(
            r#"{"Title": "Le Petit Prince", "Author": "Antoine  de Saint-Exupéry", "Language": "  English  /  French "}"#,
        )
        .unwrap();

        let book = raw.sanitize().unwrap();
        assert_eq!(book.language, "English  /  French");
        assert_eq!(book.author, "Antoine de Saint-Exupéry");
    }

    #[test]
    fn test_sanitize_trims_and_defaults() {
        let raw: RawBookRecord = serde_json::from_str(
            r#"{"Title": "  Emma ", "Author": "Jane  Austen", "Tags": ["Fiction", " ", "Classic", "Fiction"]}"#,
        )
        .unwrap();

        let book = raw.sanitize().unwrap();
        assert_eq!(book.title, "Emma");
        assert_eq!(book.author, "Jane Austen");
        assert_eq!(book.language, "");
        assert_eq!(book.goodreads, "");
        assert_eq!(book.tags, vec!["Fiction", "Classic", "Fiction"]);
    }

    #[test]
    fn test_sanitize_rejects_missing_title() {
        let raw: RawBookRecord = serde_json::from_str(r#"{"Author": "Anonymous"}"#).unwrap();
        assert_eq!(raw.sanitize(), Err("missing Title".to_string()));

        let blank: RawBookRecord = serde_json::from_str(r#"{"Title": "   "}"#).unwrap();
        assert!(blank.sanitize().is_err());
    }

    #[test]
    fn test_sanitize_converts_legacy_genre() {
        let raw: RawBookRecord = serde_json::from_str(
            r#"{"Title": "Sapiens", "Genre": "Non-Fiction / History - Anthropology"}"#,
        )
        .unwrap();

        let book = raw.sanitize().unwrap();
        assert_eq!(book.tags, vec!["Non-Fiction", "History", "Anthropology"]);
    }

    #[test]
    fn test_tags_take_precedence_over_genre() {
        let raw: RawBookRecord =
            serde_json::from_str(r#"{"Title": "X", "Tags": ["Poetry"], "Genre": "Drama"}"#)
                .unwrap();
        assert_eq!(raw.sanitize().unwrap().tags, vec!["Poetry"]);
    }

    #[test]
    fn test_load_report_totals() {
        let report = LoadReport {
            accepted: 3,
            rejected: vec![RejectedRecord {
                index: 1,
                reason: "missing Title".to_string(),
            }],
        };
        assert_eq!(report.total(), 4);
        assert!(!report.is_clean());
    }
}
