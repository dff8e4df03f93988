// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod book;
pub mod filter;

pub use book::{Book, LoadReport, RawBookRecord, RejectedRecord};
pub use filter::BookFilters;
