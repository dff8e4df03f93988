// file: src/stats/aggregator.rs
// description: tag, language and author frequency counts for the dashboard

use crate::config::StatsConfig;
use crate::models::Book;
use serde::Serialize;
use std::collections::HashMap;

/// `(value, count)` pairs, highest count first.
pub type FrequencyTable = Vec<(String, usize)>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryBreakdown {
    /// Books with a tag containing "fiction"; includes non-fiction.
    pub fiction: usize,
    pub non_fiction: usize,
    pub multi_language: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsReport {
    pub total_books: usize,
    pub unique_tags: usize,
    pub unique_languages: usize,
    pub top_tags: FrequencyTable,
    pub languages: FrequencyTable,
    pub top_authors: FrequencyTable,
    pub breakdown: CategoryBreakdown,
}

pub struct StatsAggregator<'a> {
    books: &'a [Book],
    top_tags: usize,
    top_authors: usize,
}

impl<'a> StatsAggregator<'a> {
    pub fn new(books: &'a [Book]) -> Self {
        Self {
            books,
            top_tags: 10,
            top_authors: 5,
        }
    }

    pub fn with_config(books: &'a [Book], config: &StatsConfig) -> Self {
        Self {
            books,
            top_tags: config.top_tags,
            top_authors: config.top_authors,
        }
    }

    fn all_tags(&self) -> impl Iterator<Item = &'a str> {
        self.books.iter().flat_map(|b| b.tags.iter().map(String::as_str))
    }

    pub fn tag_frequency(&self) -> FrequencyTable {
        let mut table = count(self.all_tags());
        table.truncate(self.top_tags);
        table
    }

    /// Splits composite values on "/" before counting, unlike the
    /// collection's unique-languages facet. Empty tokens are counted as "".
    pub fn language_frequency(&self) -> FrequencyTable {
        count(self.books.iter().flat_map(|b| b.languages()))
    }

    pub fn author_frequency(&self) -> FrequencyTable {
        let mut table = count(self.books.iter().map(|b| b.author.as_str()));
        table.truncate(self.top_authors);
        table
    }

    pub fn category_breakdown(&self) -> CategoryBreakdown {
        let has_tag_containing = |book: &Book, needle: &str| {
            book.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
        };

        CategoryBreakdown {
            fiction: self
                .books
                .iter()
                .filter(|b| has_tag_containing(b, "fiction"))
                .count(),
            non_fiction: self
                .books
                .iter()
                .filter(|b| has_tag_containing(b, "non-fiction"))
                .count(),
            multi_language: self.books.iter().filter(|b| b.is_multi_language()).count(),
        }
    }

    pub fn report(&self) -> StatsReport {
        let languages = self.language_frequency();
        let unique_tags = count(self.all_tags()).len();

        StatsReport {
            total_books: self.books.len(),
            unique_tags,
            unique_languages: languages.len(),
            top_tags: self.tag_frequency(),
            languages,
            top_authors: self.author_frequency(),
            breakdown: self.category_breakdown(),
        }
    }
}

/// Counts values and orders them by descending count. The sort is stable,
/// so ties keep first-encountered order.
fn count<'b>(values: impl Iterator<Item = &'b str>) -> FrequencyTable {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut table: FrequencyTable = Vec::new();

    for value in values {
        match index.get(value) {
            Some(&slot) => table[slot].1 += 1,
            None => {
                index.insert(value, table.len());
                table.push((value.to_string(), 1));
            }
        }
    }

    table.sort_by(|a, b| b.1.cmp(&a.1));
    table
}
