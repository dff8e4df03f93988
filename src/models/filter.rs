// file: src/models/filter.rs
// description: immutable filter state applied to the book collection
// reference: internal data structures

use crate::models::Book;
use serde::{Deserialize, Serialize};

/// Current search/genre/language constraints. Empty fields impose no
/// constraint. Updates return a new value and never touch the collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookFilters {
    pub search: String,
    pub genre: String,
    pub language: String,
}

impl BookFilters {
    pub fn new(
        search: impl Into<String>,
        genre: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            search: search.into(),
            genre: genre.into(),
            language: language.into(),
        }
    }

    pub fn with_search(&self, search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            ..self.clone()
        }
    }

    pub fn with_genre(&self, genre: impl Into<String>) -> Self {
        Self {
            genre: genre.into(),
            ..self.clone()
        }
    }

    pub fn with_language(&self, language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            ..self.clone()
        }
    }

    pub fn cleared() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.genre.is_empty() && self.language.is_empty()
    }

    /// All active constraints are ANDed.
    pub fn matches(&self, book: &Book) -> bool {
        if !self.search.is_empty() {
            let term = self.search.to_lowercase();
            let title_match = book.title.to_lowercase().contains(&term);
            let author_match = book.author.to_lowercase().contains(&term);
            if !title_match && !author_match {
                return false;
            }
        }

        if !self.genre.is_empty() && !book.has_tag(&self.genre) {
            return false;
        }

        if !self.language.is_empty() && book.language != self.language {
            return false;
        }

        true
    }

    pub fn describe(&self) -> String {
        if self.is_empty() {
            return "no filters".to_string();
        }

        let mut parts = Vec::new();
        if !self.search.is_empty() {
            parts.push(format!("search \"{}\"", self.search));
        }
        if !self.genre.is_empty() {
            parts.push(format!("genre \"{}\"", self.genre));
        }
        if !self.language.is_empty() {
            parts.push(format!("language \"{}\"", self.language));
        }
        parts.join(", ")
    }
}
