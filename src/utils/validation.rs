// file: src/utils/validation.rs
// description: data validation utilities and helpers
// reference: input validation patterns

use crate::error::{CatalogError, Result};
use std::path::Path;

pub struct Validator;

impl Validator {
    pub fn validate_file_path(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(CatalogError::Validation(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        if !path.is_file() {
            return Err(CatalogError::Validation(format!(
                "Path is not a file: {}",
                path.display()
            )));
        }

        Ok(())
    }

    pub fn validate_json_extension(path: &Path) -> Result<()> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Ok(()),
            _ => Err(CatalogError::Validation(format!(
                "File is not a JSON document: {}",
                path.display()
            ))),
        }
    }

    pub fn is_remote(location: &str) -> bool {
        location.starts_with("http://") || location.starts_with("https://")
    }

    pub fn validate_url(url: &str) -> Result<()> {
        let host = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"))
            .ok_or_else(|| CatalogError::Validation(format!("Invalid URL format: {}", url)))?;

        if host.is_empty() || host.starts_with('/') {
            return Err(CatalogError::Validation(format!(
                "URL has no host: {}",
                url
            )));
        }

        Ok(())
    }

    pub fn validate_limit(name: &str, limit: usize) -> Result<()> {
        if limit == 0 {
            return Err(CatalogError::Validation(format!(
                "{} must be greater than 0",
                name
            )));
        }

        if limit > 1000 {
            return Err(CatalogError::Validation(format!(
                "{} too large (max 1000)",
                name
            )));
        }

        Ok(())
    }

    /// Collapses internal whitespace runs and trims the ends.
    pub fn sanitize_text(text: &str) -> String {
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    pub fn truncate_text(text: &str, max_chars: usize) -> String {
        if text.chars().count() <= max_chars {
            text.to_string()
        } else if max_chars <= 3 {
            text.chars().take(max_chars).collect()
        } else {
            let head: String = text.chars().take(max_chars - 3).collect();
            format!("{}...", head)
        }
    }
}
