// file: src/catalog/document.rs
// description: parsing and sanitizing a bookshelf JSON document

use crate::error::{CatalogError, Result};
use crate::models::{Book, LoadReport, RawBookRecord, RejectedRecord};
use serde_json::Value;
use tracing::warn;

/// Parses the top-level array and sanitizes each entry. Bad entries are
/// reported and skipped; only a document that is not a JSON array fails.
pub fn parse_document(content: &str) -> Result<(Vec<Book>, LoadReport)> {
    let value: Value = serde_json::from_str(content)
        .map_err(|e| CatalogError::Document(format!("not valid JSON: {}", e)))?;

    let Value::Array(entries) = value else {
        return Err(CatalogError::Document(
            "top-level value must be an array of books".to_string(),
        ));
    };

    let mut books = Vec::with_capacity(entries.len());
    let mut report = LoadReport::default();

    for (index, entry) in entries.into_iter().enumerate() {
        let sanitized = serde_json::from_value::<RawBookRecord>(entry)
            .map_err(|e| e.to_string())
            .and_then(RawBookRecord::sanitize);

        match sanitized {
            Ok(book) => books.push(book),
            Err(reason) => {
                warn!("Skipping book record {}: {}", index, reason);
                report.rejected.push(RejectedRecord { index, reason });
            }
        }
    }

    report.accepted = books.len();
    Ok((books, report))
}
