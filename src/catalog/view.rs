// file: src/catalog/view.rs
// description: derived view handed to the presentation layer
// reference: internal data structures

use crate::models::{Book, BookFilters};
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortColumn {
    Title,
    Author,
    Language,
}

impl SortColumn {
    fn key<'a>(&self, book: &'a Book) -> &'a str {
        match self {
            Self::Title => &book.title,
            Self::Author => &book.author,
            Self::Language => &book.language,
        }
    }
}

impl FromStr for SortColumn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "title" => Ok(Self::Title),
            "author" => Ok(Self::Author),
            "language" => Ok(Self::Language),
            other => Err(format!("unknown sort column '{}'", other)),
        }
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Title => "title",
            Self::Author => "author",
            Self::Language => "language",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortSpec {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn ascending(column: SortColumn) -> Self {
        Self {
            column,
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(column: SortColumn) -> Self {
        Self {
            column,
            direction: SortDirection::Descending,
        }
    }

    /// Case-insensitive comparison on the chosen column.
    pub fn compare(&self, a: &Book, b: &Book) -> Ordering {
        let ordering = self
            .column
            .key(a)
            .to_lowercase()
            .cmp(&self.column.key(b).to_lowercase());

        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Everything the presentation layer needs for one render.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogView<'a> {
    pub books: Vec<&'a Book>,
    pub filters: BookFilters,
    pub unique_genres: Vec<String>,
    pub unique_languages: Vec<String>,
    pub total_count: usize,
    pub filtered_count: usize,
}

impl<'a> CatalogView<'a> {
    /// Stable: rows with equal keys keep their collection order.
    pub fn sorted(mut self, spec: Option<SortSpec>) -> Self {
        if let Some(spec) = spec {
            self.books.sort_by(|a, b| spec.compare(a, b));
        }
        self
    }

    pub fn is_filtered(&self) -> bool {
        !self.filters.is_empty()
    }

    pub fn summary_line(&self) -> String {
        format!(
            "Showing {} of {} books",
            self.filtered_count, self.total_count
        )
    }
}
