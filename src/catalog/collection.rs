// file: src/catalog/collection.rs
// description: book collection accessor with one-shot loading and facets
// reference: internal data structures

use crate::catalog::document::parse_document;
use crate::catalog::source::DocumentSource;
use crate::catalog::view::CatalogView;
use crate::error::Result;
use crate::models::{Book, BookFilters, LoadReport};
use std::collections::BTreeSet;
use tracing::{debug, error, info};

/// `Loading` moves to `Ready` or `Failed` exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Ready,
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct BookCollection {
    books: Vec<Book>,
    status: LoadStatus,
    report: LoadReport,
}

impl BookCollection {
    pub fn new() -> Self {
        Self {
            books: Vec::new(),
            status: LoadStatus::Loading,
            report: LoadReport::default(),
        }
    }

    /// Builds a ready collection from books already in memory.
    pub fn from_books(books: Vec<Book>) -> Self {
        let report = LoadReport {
            accepted: books.len(),
            rejected: Vec::new(),
        };
        Self {
            books,
            status: LoadStatus::Ready,
            report,
        }
    }

    /// Requests the document on first use. Later calls do nothing, so a
    /// failed load stays failed for the life of the collection.
    pub async fn fetch(&mut self, source: &DocumentSource) -> &LoadStatus {
        if self.status != LoadStatus::Loading {
            debug!("Bookshelf already loaded, skipping fetch");
            return &self.status;
        }

        match Self::load(source).await {
            Ok((books, report)) => {
                info!(
                    "Loaded {} books from {} ({} skipped)",
                    books.len(),
                    source,
                    report.rejected.len()
                );
                self.books = books;
                self.report = report;
                self.status = LoadStatus::Ready;
            }
            Err(e) => {
                error!("Error loading books: {}", e);
                self.status = LoadStatus::Failed(e.to_string());
            }
        }

        &self.status
    }

    async fn load(source: &DocumentSource) -> Result<(Vec<Book>, LoadReport)> {
        let content = source.read_to_string().await?;
        parse_document(&content)
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            LoadStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn report(&self) -> &LoadReport {
        &self.report
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn total_count(&self) -> usize {
        self.books.len()
    }

    /// Every tag across all books, deduplicated and sorted.
    pub fn unique_genres(&self) -> Vec<String> {
        self.books
            .iter()
            .flat_map(|book| book.tags.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Raw Language values, deduplicated and sorted. Composite values such
    /// as "English / French" stay whole here, unlike the statistics view.
    pub fn unique_languages(&self) -> Vec<String> {
        self.books
            .iter()
            .map(|book| book.language.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Books matching all active filters, in collection order.
    pub fn filter(&self, filters: &BookFilters) -> Vec<&Book> {
        self.books.iter().filter(|book| filters.matches(book)).collect()
    }

    pub fn view(&self, filters: &BookFilters) -> CatalogView<'_> {
        let books = self.filter(filters);
        let filtered_count = books.len();

        CatalogView {
            books,
            filters: filters.clone(),
            unique_genres: self.unique_genres(),
            unique_languages: self.unique_languages(),
            total_count: self.total_count(),
            filtered_count,
        }
    }
}

impl Default for BookCollection {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use std::path::PathBuf;
    use std::time::Duration;
    use tempfile::TempDir;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn sample() -> BookCollection {
        BookCollection::from_books(vec![
            Book::new("Dune", "Herbert", "English", "", vec!["Sci-Fi".to_string()]),
            Book::new("Emma", "Austen", "English", "", vec!["Fiction".to_string()]),
        ])
    }

    fn titles(books: &[&Book]) -> Vec<String> {
        books.iter().map(|b| b.title.clone()).collect()
    }

    #[test]
    fn test_reference_examples() {
        let collection = sample();
        let none = BookFilters::default();

        assert_eq!(titles(&collection.filter(&none.with_search("du"))), vec!["Dune"]);
        assert_eq!(titles(&collection.filter(&none.with_genre("Fiction"))), vec!["Emma"]);
        assert_eq!(
            titles(&collection.filter(&none.with_language("English"))),
            vec!["Dune", "Emma"]
        );

        let view = collection.view(&none.with_search("zz"));
        assert!(view.books.is_empty());
        assert_eq!(view.filtered_count, 0);
        assert_eq!(view.total_count, 2);
    }

    #[test]
    fn test_search_property_holds_for_every_result() {
        let collection = BookCollection::from_books(vec![
            Book::new("The Hobbit", "J.R.R. Tolkien", "English", "", vec![]),
            Book::new("Hyperion", "Dan Simmons", "English", "", vec![]),
            Book::new("Solaris", "Stanisław Lem", "Polish / English", "", vec![]),
            Book::new("Beloved", "Toni Morrison", "English", "", vec![]),
        ]);

        for term in ["o", "HYP", "lem", "on", "xyz"] {
            let filters = BookFilters::default().with_search(term);
            let result = collection.filter(&filters);
            let needle = term.to_lowercase();

            for book in collection.books() {
                let has = book.title.to_lowercase().contains(&needle)
                    || book.author.to_lowercase().contains(&needle);
                let returned = result.iter().any(|b| std::ptr::eq(*b, book));
                assert_eq!(has, returned, "term {:?} book {:?}", term, book.title);
            }
        }
    }

    #[test]
    fn test_genre_results_contain_exact_tag() {
        let collection = BookCollection::from_books(vec![
            Book::new("A", "", "", "", vec!["Fantasy".to_string(), "Classic".to_string()]),
            Book::new("B", "", "", "", vec!["Fantasy Classic".to_string()]),
            Book::new("C", "", "", "", vec!["Classic".to_string()]),
        ]);

        let result = collection.filter(&BookFilters::default().with_genre("Classic"));
        assert_eq!(titles(&result), vec!["A", "C"]);
        assert!(result.iter().all(|b| b.has_tag("Classic")));
    }

    #[test]
    fn test_filter_is_idempotent() {
        let collection = sample();
        let filters = BookFilters::new("e", "", "English");
        let first: Vec<Book> = collection.filter(&filters).into_iter().cloned().collect();

        let again = BookCollection::from_books(first.clone());
        let second: Vec<Book> = again.filter(&filters).into_iter().cloned().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_clearing_filters_restores_everything() {
        let collection = sample();
        let narrowed = BookFilters::new("du", "Sci-Fi", "English");
        assert_eq!(collection.view(&narrowed).filtered_count, 1);

        let view = collection.view(&BookFilters::cleared());
        assert_eq!(view.filtered_count, view.total_count);
    }

    #[test]
    fn test_facets_are_sorted_and_unique() {
        let collection = BookCollection::from_books(vec![
            Book::new("A", "", "French", "", vec!["Poetry".to_string(), "Art".to_string()]),
            Book::new("B", "", "English / French", "", vec!["Art".to_string()]),
            Book::new("C", "", "English", "", vec!["Poetry".to_string(), "Poetry".to_string()]),
        ]);

        assert_eq!(collection.unique_genres(), vec!["Art", "Poetry"]);
        assert_eq!(
            collection.unique_languages(),
            vec!["English", "English / French", "French"]
        );
    }

    #[test]
    fn test_unique_languages_keep_raw_spacing() {
        let (books, _) = parse_document(
            r#"[{"Title": "A", "Language": "English  /  French"}, {"Title": "B", "Language": " English "}]"#,
        )
        .unwrap();
        let collection = BookCollection::from_books(books);

        assert_eq!(
            collection.unique_languages(),
            vec!["English", "English  /  French"]
        );
    }

    #[tokio::test]
    async fn test_fetch_success_then_no_refetch() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("user_bookshelf.json");
        fs::write(&path, r#"[{"Title": "Dune", "Author": "Herbert", "Tags": ["Sci-Fi"]}]"#)
            .unwrap();
        let source = DocumentSource::File(path.clone());

        let mut collection = BookCollection::new();
        assert!(collection.is_loading());
        assert_eq!(collection.fetch(&source).await, &LoadStatus::Ready);
        assert_eq!(collection.total_count(), 1);

        fs::write(&path, "[]").unwrap();
        collection.fetch(&source).await;
        assert_eq!(collection.total_count(), 1);
    }

    #[tokio::test]
    async fn test_fetch_failure_leaves_collection_empty() {
        let source = DocumentSource::File(PathBuf::from("/nonexistent/user_bookshelf.json"));
        let mut collection = BookCollection::new();

        let status = collection.fetch(&source).await.clone();
        assert!(matches!(status, LoadStatus::Failed(_)));
        assert!(collection.error().unwrap().contains("/nonexistent/user_bookshelf.json"));
        assert!(collection.books().is_empty());
        assert!(collection.unique_genres().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_http_error_status_fails() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/user_bookshelf.json", listener.local_addr().unwrap());
        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 2048];
            let _ = stream.read(&mut request).await;
            stream
                .write_all(b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n")
                .await
                .unwrap();
        });

        let source = DocumentSource::parse(&url, Duration::from_secs(5)).unwrap();
        let mut collection = BookCollection::new();
        let status = collection.fetch(&source).await.clone();

        assert!(matches!(status, LoadStatus::Failed(ref message) if message.contains("status 404")));
        assert!(collection.books().is_empty());
    }
}
