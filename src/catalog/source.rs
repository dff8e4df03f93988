// file: src/catalog/source.rs
// description: where the bookshelf document comes from and how it is read
// reference: https://docs.rs/reqwest

use crate::config::SourceConfig;
use crate::error::{CatalogError, Result};
use crate::utils::validation::Validator;
use reqwest::Client;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    File(PathBuf),
    Url { url: String, timeout: Duration },
}

impl DocumentSource {
    pub fn from_config(config: &SourceConfig) -> Result<Self> {
        Self::parse(&config.location, Duration::from_secs(config.timeout_secs))
    }

    pub fn parse(location: &str, timeout: Duration) -> Result<Self> {
        let location = location.trim();
        if location.is_empty() {
            return Err(CatalogError::Validation(
                "Document location is empty".to_string(),
            ));
        }

        if Validator::is_remote(location) {
            Validator::validate_url(location)?;
            Ok(Self::Url {
                url: location.to_string(),
                timeout,
            })
        } else {
            Ok(Self::File(PathBuf::from(location)))
        }
    }

    pub fn location(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Url { url, .. } => url.clone(),
        }
    }

    /// Reads the raw document text. A non-success HTTP status is an error.
    pub async fn read_to_string(&self) -> Result<String> {
        match self {
            Self::File(path) => {
                debug!("Reading bookshelf document from {}", path.display());
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| CatalogError::FileOperation {
                        path: path.clone(),
                        source,
                    })
            }
            Self::Url { url, timeout } => {
                debug!("Requesting bookshelf document from {}", url);
                let fetch_error = |e: reqwest::Error| CatalogError::Fetch {
                    location: url.clone(),
                    message: e.to_string(),
                };

                let client = Client::builder()
                    .timeout(*timeout)
                    .build()
                    .map_err(fetch_error)?;

                let response = client.get(url).send().await.map_err(fetch_error)?;

                if !response.status().is_success() {
                    return Err(CatalogError::HttpStatus {
                        location: url.clone(),
                        status: response.status().as_u16(),
                    });
                }

                response.text().await.map_err(fetch_error)
            }
        }
    }
}

impl fmt::Display for DocumentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.location())
    }
}
