// file: src/tags/converter.rs
// description: legacy genre string to tag list conversion

use crate::tags::patterns::{GENRE_ALIASES, GENRE_SEPARATOR};

/// Splits a legacy `Genre` value such as "Fantasy / Sci-Fi" into tags.
pub fn parse_genre(genre: &str) -> Vec<String> {
    let genre = genre.trim();
    if genre.is_empty() {
        return Vec::new();
    }

    if let Some(alias) = GENRE_ALIASES.get(genre) {
        return vec![alias.to_string()];
    }

    GENRE_SEPARATOR
        .split(genre)
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}
