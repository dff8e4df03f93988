// file: src/exporter/json.rs
// description: json export of a filtered view and its statistics

use crate::catalog::CatalogView;
use crate::error::{CatalogError, Result};
use crate::models::BookFilters;
use crate::stats::StatsReport;
use chrono::Utc;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone)]
pub struct JsonExporter {
    output_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportedFile {
    pub name: String,
    pub sha256: String,
    pub bytes: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportManifest {
    pub exported_at: String,
    pub source: String,
    pub filters: BookFilters,
    pub total_books: usize,
    pub exported_books: usize,
    pub files: Vec<ExportedFile>,
}

impl JsonExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir).map_err(|source| CatalogError::FileOperation {
            path: output_dir.clone(),
            source,
        })?;
        Ok(Self { output_dir })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Writes `books.json`, `stats.json` and a `manifest.json` describing both.
    pub fn export_view(
        &self,
        view: &CatalogView<'_>,
        stats: &StatsReport,
        source: &str,
        pretty: bool,
    ) -> Result<ExportManifest> {
        info!("Starting JSON export to {:?}", self.output_dir);

        let files = vec![
            self.write_json("books.json", &view.books, pretty)?,
            self.write_json("stats.json", stats, pretty)?,
        ];

        let manifest = ExportManifest {
            exported_at: Utc::now().to_rfc3339(),
            source: source.to_string(),
            filters: view.filters.clone(),
            total_books: view.total_count,
            exported_books: view.filtered_count,
            files,
        };
        self.write_json("manifest.json", &manifest, true)?;

        info!(
            "Export complete: {} of {} books exported",
            manifest.exported_books, manifest.total_books
        );
        Ok(manifest)
    }

    fn write_json<T: Serialize + ?Sized>(
        &self,
        name: &str,
        value: &T,
        pretty: bool,
    ) -> Result<ExportedFile> {
        let json = if pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };

        let path = self.output_dir.join(name);
        fs::write(&path, &json).map_err(|source| CatalogError::FileOperation {
            path: path.clone(),
            source,
        })?;

        Ok(ExportedFile {
            name: name.to_string(),
            sha256: checksum(json.as_bytes()),
            bytes: json.len(),
        })
    }
}

fn checksum(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::BookCollection;
    use crate::models::Book;
    use crate::stats::StatsAggregator;
    use serde_json::Value;
    use tempfile::tempdir;

    #[test]
    fn test_exporter_creation() {
        let dir = tempdir().unwrap();
        let exporter = JsonExporter::new(dir.path().join("nested/exports"));
        assert!(exporter.is_ok());
        assert!(dir.path().join("nested/exports").is_dir());
    }

    #[test]
    fn test_checksum_is_stable() {
        assert_eq!(checksum(b"[]"), checksum(b"[]"));
        assert_eq!(checksum(b"").len(), 64);
    }

    #[test]
    fn test_export_filtered_view() {
        let dir = tempdir().unwrap();
        let collection = BookCollection::from_books(vec![
            Book::new("Dune", "Herbert", "English", "", vec!["Sci-Fi".to_string()]),
            Book::new("Emma", "Austen", "English", "", vec!["Fiction".to_string()]),
        ]);
        let view = collection.view(&BookFilters::default().with_genre("Fiction"));
        let stats = StatsAggregator::new(collection.books()).report();

        let exporter = JsonExporter::new(dir.path()).unwrap();
        let manifest = exporter
            .export_view(&view, &stats, "data/user_bookshelf.json", false)
            .unwrap();

        assert_eq!(manifest.exported_books, 1);
        assert_eq!(manifest.total_books, 2);
        assert_eq!(manifest.files.len(), 2);

        let books: Value =
            serde_json::from_str(&fs::read_to_string(dir.path().join("books.json")).unwrap())
                .unwrap();
        assert_eq!(books[0]["Title"], "Emma");

        let written = fs::read(dir.path().join("books.json")).unwrap();
        assert_eq!(manifest.files[0].sha256, checksum(&written));

        let saved: Value =
            serde_json::from_str(&fs::read_to_string(dir.path().join("manifest.json")).unwrap())
                .unwrap();
        assert_eq!(saved["filters"]["genre"], "Fiction");
    }
}
