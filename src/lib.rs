// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod exporter;
pub mod models;
pub mod render;
pub mod stats;
pub mod tags;
pub mod utils;

pub use catalog::{
    BookCollection, BrowseSession, CatalogView, DocumentSource, LoadStatus, SessionCommand,
    SortColumn, SortDirection, SortSpec,
};
pub use config::{Config, DisplayConfig, Layout, SourceConfig, StatsConfig};
pub use error::{CatalogError, Result};
pub use exporter::json::{ExportManifest, JsonExporter};
pub use models::{Book, BookFilters, LoadReport};
pub use stats::{CategoryBreakdown, StatsAggregator, StatsReport};
pub use tags::{DocumentRewriter, RewriteSummary};
pub use utils::{LoadSpinner, Validator};
