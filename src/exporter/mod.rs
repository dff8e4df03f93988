// file: src/exporter/mod.rs
// description: export of catalog views to disk
// reference: internal module structure

pub mod json;

pub use json::{ExportManifest, ExportedFile, JsonExporter};
