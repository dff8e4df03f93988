// file: src/catalog/mod.rs
// description: book collection loading, facets and filtered views
// reference: internal module structure

pub mod collection;
pub mod document;
pub mod session;
pub mod source;
pub mod view;

pub use collection::{BookCollection, LoadStatus};
pub use document::parse_document;
pub use session::{BrowseSession, SessionCommand};
pub use source::DocumentSource;
pub use view::{CatalogView, SortColumn, SortDirection, SortSpec};
