// file: src/tags/patterns.rs
// description: compiled patterns and lookup tables for tag cleanup
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

lazy_static! {
    // "/" with any spacing, or a dash with spaces on both sides.
    // A bare dash is part of the term ("Non-Fiction", "Sci-Fi").
    pub static ref GENRE_SEPARATOR: Regex = Regex::new(r"/| - ")
        .expect("GENRE_SEPARATOR regex is valid");

    /// Genre strings that map wholesale to a single tag.
    pub static ref GENRE_ALIASES: HashMap<&'static str, &'static str> = HashMap::from([
        ("Photography / Art", "Art"),
        ("Photography/Art", "Art"),
        ("Photography - Art", "Art"),
        ("Photography-Art", "Art"),
    ]);

    /// Single tags folded into a broader one.
    pub static ref TAG_REPLACEMENTS: HashMap<&'static str, &'static str> =
        HashMap::from([("Photography", "Art")]);
}

/// Compound terms that an earlier whitespace split broke into adjacent tags.
pub static SPLIT_COMPOUNDS: &[(&[&str], &str)] = &[
    (&["Non", "Fiction"], "Non-Fiction"),
    (&["Self", "Help"], "Self-Help"),
    (&["Sci", "Fi"], "Sci-Fi"),
    (&["Science", "Fiction"], "Science Fiction"),
    (&["Historical", "Fiction"], "Historical Fiction"),
    (&["Literary", "Fiction"], "Literary Fiction"),
    (&["Short", "Stories"], "Short Stories"),
    (&["Social", "Issues"], "Social Issues"),
    (&["Food", "Ethics"], "Food Ethics"),
    (&["Color", "Theory"], "Color Theory"),
    (&["Creative", "Philosophy"], "Creative Philosophy"),
    (&["Chinese", "Philosophy"], "Chinese Philosophy"),
    (&["Computer", "Interaction"], "Computer Interaction"),
    (&["Human", "Computer", "Interaction"], "Human Computer Interaction"),
    (&["Fictional", "Memoir"], "Fictional Memoir"),
    (&["Visual", "Anthology"], "Visual Anthology"),
];

pub fn compound_for(parts: &[String]) -> Option<&'static str> {
    SPLIT_COMPOUNDS
        .iter()
        .find(|(pattern, _)| {
            pattern.len() == parts.len() && pattern.iter().zip(parts).all(|(p, t)| *p == t.as_str())
        })
        .map(|(_, merged)| *merged)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_pattern() {
        let parts: Vec<&str> = GENRE_SEPARATOR.split("Fantasy / Sci-Fi - Drama/Poetry").collect();
        assert_eq!(parts, vec!["Fantasy ", " Sci-Fi", "Drama", "Poetry"]);
        assert!(!GENRE_SEPARATOR.is_match("Non-Fiction"));
    }

    #[test]
    fn test_compound_lookup() {
        let two = vec!["Non".to_string(), "Fiction".to_string()];
        let three = vec![
            "Human".to_string(),
            "Computer".to_string(),
            "Interaction".to_string(),
        ];
        let none = vec!["Fiction".to_string(), "Non".to_string()];

        assert_eq!(compound_for(&two), Some("Non-Fiction"));
        assert_eq!(compound_for(&three), Some("Human Computer Interaction"));
        assert_eq!(compound_for(&none), None);
    }
}
