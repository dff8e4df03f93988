// file: src/tags/fixer.rs
// description: repair of compound tags that were split into adjacent entries

use crate::tags::patterns::{TAG_REPLACEMENTS, compound_for};

/// Rejoins split compounds, applies replacements and drops repeats.
pub fn fix_split_tags(tags: &[String]) -> Vec<String> {
    let mut merged: Vec<String> = Vec::with_capacity(tags.len());
    let mut i = 0;

    while i < tags.len() {
        let compound = [2, 3].into_iter().find_map(|width| {
            tags.get(i..i + width)
                .and_then(compound_for)
                .map(|term| (term, width))
        });

        match compound {
            Some((term, width)) => {
                merged.push(term.to_string());
                i += width;
            }
            None => {
                let tag = tags[i].as_str();
                let replaced = TAG_REPLACEMENTS.get(tag).copied().unwrap_or(tag);
                merged.push(replaced.to_string());
                i += 1;
            }
        }
    }

    let mut unique: Vec<String> = Vec::with_capacity(merged.len());
    for tag in merged {
        if !unique.contains(&tag) {
            unique.push(tag);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_merges_two_part_compounds() {
        assert_eq!(
            fix_split_tags(&tags(&["Non", "Fiction", "History"])),
            tags(&["Non-Fiction", "History"])
        );
        assert_eq!(
            fix_split_tags(&tags(&["Sci", "Fi", "Self", "Help"])),
            tags(&["Sci-Fi", "Self-Help"])
        );
    }

    #[test]
    fn test_merges_three_part_compound() {
        assert_eq!(
            fix_split_tags(&tags(&["Design", "Human", "Computer", "Interaction"])),
            tags(&["Design", "Human Computer Interaction"])
        );
    }

    #[test]
    fn test_photography_becomes_art_and_dedupes() {
        assert_eq!(
            fix_split_tags(&tags(&["Photography", "Art", "Essays"])),
            tags(&["Art", "Essays"])
        );
    }

    #[test]
    fn test_clean_tags_unchanged() {
        let clean = tags(&["Fantasy", "Science Fiction"]);
        assert_eq!(fix_split_tags(&clean), clean);
        assert!(fix_split_tags(&[]).is_empty());
    }
}
