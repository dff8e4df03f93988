// file: src/tags/rewrite.rs
// description: in-place tag maintenance for a local bookshelf document
// reference: https://docs.rs/serde_json

use crate::error::{CatalogError, Result};
use crate::tags::{fix_split_tags, parse_genre};
use crate::utils::validation::Validator;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagChange {
    pub title: String,
    pub before: Vec<String>,
    pub after: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RewriteSummary {
    pub books: usize,
    pub modified: usize,
    pub changes: Vec<TagChange>,
    pub distinct_tags: Vec<String>,
}

/// Rewrites the `Genre`/`Tags` fields of a document on disk. Every other
/// field, and the key order of each record, is left as it was.
pub struct DocumentRewriter {
    path: PathBuf,
}

impl DocumentRewriter {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        Validator::validate_file_path(&path)?;
        Validator::validate_json_extension(&path)?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replaces each legacy `Genre` string with a `Tags` array.
    pub fn convert_genres(&self) -> Result<RewriteSummary> {
        info!("Converting genres to tags in {}", self.path.display());

        self.rewrite(|record| {
            let genre = record.get("Genre")?;
            let genre = genre.as_str().unwrap_or_default().to_string();
            let tags = parse_genre(&genre);

            record.insert("Tags".to_string(), string_array(&tags));
            record.shift_remove("Genre");

            Some((vec![genre], tags))
        })
    }

    /// Rejoins compound tags that were split into adjacent entries.
    pub fn fix_tags(&self) -> Result<RewriteSummary> {
        info!("Fixing split tags in {}", self.path.display());

        self.rewrite(|record| {
            let before = record.get("Tags").map(string_values)?;
            let after = fix_split_tags(&before);
            if after == before {
                return None;
            }

            record.insert("Tags".to_string(), string_array(&after));
            Some((before, after))
        })
    }

    fn rewrite<F>(&self, mut edit: F) -> Result<RewriteSummary>
    where
        F: FnMut(&mut Map<String, Value>) -> Option<(Vec<String>, Vec<String>)>,
    {
        let mut records = self.read()?;
        let mut summary = RewriteSummary {
            books: records.len(),
            ..RewriteSummary::default()
        };

        for record in records.iter_mut().filter_map(Value::as_object_mut) {
            if let Some((before, after)) = edit(record) {
                let title = record
                    .get("Title")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string();
                debug!("Updated '{}': {:?} -> {:?}", title, before, after);

                summary.modified += 1;
                summary.changes.push(TagChange {
                    title,
                    before,
                    after,
                });
            }
        }

        summary.distinct_tags = distinct_tags(&records);
        self.write(&records)?;

        info!(
            "Modified {} of {} books ({} distinct tags)",
            summary.modified,
            summary.books,
            summary.distinct_tags.len()
        );
        Ok(summary)
    }

    fn read(&self) -> Result<Vec<Value>> {
        let content = fs::read_to_string(&self.path).map_err(|source| {
            CatalogError::FileOperation {
                path: self.path.clone(),
                source,
            }
        })?;

        match serde_json::from_str::<Value>(&content)? {
            Value::Array(records) => Ok(records),
            _ => Err(CatalogError::Document(
                "top-level value must be an array of books".to_string(),
            )),
        }
    }

    fn write(&self, records: &[Value]) -> Result<()> {
        let mut json = serde_json::to_string_pretty(records)?;
        json.push('\n');

        fs::write(&self.path, json).map_err(|source| CatalogError::FileOperation {
            path: self.path.clone(),
            source,
        })
    }
}

fn string_values(value: &Value) -> Vec<String> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn string_array(values: &[String]) -> Value {
    Value::Array(values.iter().cloned().map(Value::String).collect())
}

fn distinct_tags(records: &[Value]) -> Vec<String> {
    records
        .iter()
        .filter_map(|record| record.get("Tags"))
        .flat_map(string_values)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn write_doc(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("user_bookshelf.json");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_rejects_non_json_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("books.txt");
        fs::write(&path, "[]").unwrap();
        assert!(DocumentRewriter::new(&path).is_err());
    }

    #[test]
    fn test_convert_genres_preserves_other_fields() {
        let temp = TempDir::new().unwrap();
        let path = write_doc(
            &temp,
            r#"[
  {"Title": "Cosmos", "Author": "Carl Sagan", "Genre": "Non-Fiction / Science", "Language": "English", "Goodreads": "https://www.goodreads.com/book/show/55030"},
  {"Title": "Tagged", "Author": "A", "Tags": ["Poetry"]}
]"#,
        );

        let summary = DocumentRewriter::new(&path).unwrap().convert_genres().unwrap();
        assert_eq!(summary.books, 2);
        assert_eq!(summary.modified, 1);
        assert_eq!(summary.distinct_tags, vec!["Non-Fiction", "Poetry", "Science"]);

        let written: Vec<Value> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let cosmos = written[0].as_object().unwrap();
        let keys: Vec<&str> = cosmos.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Title", "Author", "Language", "Goodreads", "Tags"]);
        assert_eq!(cosmos["Tags"], serde_json::json!(["Non-Fiction", "Science"]));
    }

    #[test]
    fn test_fix_tags_reports_changes() {
        let temp = TempDir::new().unwrap();
        let path = write_doc(
            &temp,
            r#"[
  {"Title": "Sapiens", "Tags": ["Non", "Fiction", "History"]},
  {"Title": "Dune", "Tags": ["Sci-Fi"]}
]"#,
        );

        let summary = DocumentRewriter::new(&path).unwrap().fix_tags().unwrap();
        assert_eq!(summary.modified, 1);
        assert_eq!(
            summary.changes,
            vec![TagChange {
                title: "Sapiens".to_string(),
                before: vec!["Non".to_string(), "Fiction".to_string(), "History".to_string()],
                after: vec!["Non-Fiction".to_string(), "History".to_string()],
            }]
        );
        assert_eq!(summary.distinct_tags, vec!["History", "Non-Fiction", "Sci-Fi"]);
    }

    #[test]
    fn test_non_ascii_is_written_verbatim() {
        let temp = TempDir::new().unwrap();
        let path = write_doc(&temp, r#"[{"Title": "Éloge de l'ombre", "Tags": ["Photography"]}]"#);

        DocumentRewriter::new(&path).unwrap().fix_tags().unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("Éloge de l'ombre"));
        assert!(content.contains("\"Art\""));
    }

    #[test]
    fn test_rejects_non_array_document() {
        let temp = TempDir::new().unwrap();
        let path = write_doc(&temp, r#"{"Title": "Lonely"}"#);
        let result = DocumentRewriter::new(&path).unwrap().fix_tags();
        assert!(matches!(result, Err(CatalogError::Document(_))));
    }
}
