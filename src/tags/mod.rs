// file: src/tags/mod.rs
// description: tag cleanup tooling for bookshelf documents
// reference: internal module structure

pub mod converter;
pub mod fixer;
pub mod patterns;
pub mod rewrite;

pub use converter::parse_genre;
pub use fixer::fix_split_tags;
pub use rewrite::{DocumentRewriter, RewriteSummary};
