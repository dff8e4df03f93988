// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{CatalogError, Result};
use crate::utils::validation::Validator;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub source: SourceConfig,
    pub display: DisplayConfig,
    pub stats: StatsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourceConfig {
    /// Local path or http(s) URL of the bookshelf document
    pub location: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    Auto,
    Table,
    Cards,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub layout: Layout,
    /// Terminal width in columns, 0 to detect
    #[serde(default)]
    pub width: usize,
    pub max_tags: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StatsConfig {
    pub top_tags: usize,
    pub top_authors: usize,
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let defaults = Self::default_config();
        let mut builder = config::Config::builder()
            .set_default("source.location", defaults.source.location)
            .and_then(|b| b.set_default("source.timeout_secs", defaults.source.timeout_secs))
            .and_then(|b| b.set_default("display.layout", "auto"))
            .and_then(|b| b.set_default("display.width", 0_u64))
            .and_then(|b| b.set_default("display.max_tags", defaults.display.max_tags as u64))
            .and_then(|b| b.set_default("stats.top_tags", defaults.stats.top_tags as u64))
            .and_then(|b| b.set_default("stats.top_authors", defaults.stats.top_authors as u64))
            .map_err(|e| CatalogError::Config(e.to_string()))?;

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder
                .add_source(config::File::from(Path::new("config/default.toml")).required(false));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("BOOKSHELF")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| CatalogError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| CatalogError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            source: SourceConfig {
                location: "data/user_bookshelf.json".to_string(),
                timeout_secs: 10,
            },
            display: DisplayConfig {
                layout: Layout::Auto,
                width: 0,
                max_tags: 4,
            },
            stats: StatsConfig {
                top_tags: 10,
                top_authors: 5,
            },
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.source.location.trim().is_empty() {
            return Err(CatalogError::Config(
                "source.location must not be empty".to_string(),
            ));
        }

        if self.source.timeout_secs == 0 {
            return Err(CatalogError::Config(
                "source.timeout_secs must be greater than 0".to_string(),
            ));
        }

        Validator::validate_limit("stats.top_tags", self.stats.top_tags)
            .and_then(|_| Validator::validate_limit("stats.top_authors", self.stats.top_authors))
            .and_then(|_| Validator::validate_limit("display.max_tags", self.display.max_tags))
            .map_err(|e| CatalogError::Config(e.to_string()))?;

        Ok(())
    }
}
