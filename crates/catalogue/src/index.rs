//! Catalogue loading and indexing logic.
//!
//! - Parse the dataset file into records
//! - Build the secondary indices (distinct genres and authors)

use crate::error::Result;
use crate::parser;
use crate::types::Catalogue;
use std::collections::BTreeSet;
use std::path::Path;
use std::time::Instant;
use tracing::info;

impl Catalogue {
    /// Load the book dataset from a CSV file
    ///
    /// This is the main entry point for loading data. Repeated loads of the
    /// same file should go through [`crate::CatalogueCache`] instead.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading book catalogue from {}", path.display());
        let start = Instant::now();

        let books = parser::parse_books(path)?;
        let catalogue = Catalogue::from_books(books);

        let (books, genres, authors) = catalogue.counts();
        info!(
            "Loaded {} books ({} genres, {} authors) in {:.2?}",
            books,
            genres,
            authors,
            start.elapsed()
        );
        Ok(catalogue)
    }

    /// Build the sorted distinct genre and author lists
    pub(crate) fn build_secondary_indices(&mut self) {
        let mut genres = BTreeSet::new();
        let mut authors = BTreeSet::new();

        for book in &self.books {
            genres.extend(book.genres.iter().map(String::as_str));
            if !book.author.is_empty() {
                authors.insert(book.author.as_str());
            }
        }

        self.genres = genres.into_iter().map(str::to_string).collect();
        self.authors = authors.into_iter().map(str::to_string).collect();
    }
}

#[cfg(test)]
mod tests {
    use crate::types::{Book, Catalogue};

    fn book(title: &str, author: &str, genres: &[&str]) -> Book {
        Book {
            title: title.to_string(),
            author: author.to_string(),
            rating: Some(4.0),
            rating_count: 1,
            genres: genres.iter().map(|g| g.to_string()).collect(),
            detail_url: String::new(),
            purchase_url: String::new(),
            pages: None,
        }
    }

    #[test]
    fn test_secondary_indices_are_sorted_and_distinct() {
        let catalogue = Catalogue::from_books(vec![
            book("A", "Zadie Smith", &["Fiction", "Drama"]),
            book("B", "Anne Carson", &["Poetry", "Fiction"]),
            book("C", "Zadie Smith", &[]),
            book("D", "", &["Classics"]),
        ]);

        assert_eq!(
            catalogue.genres(),
            &["Classics", "Drama", "Fiction", "Poetry"]
        );
        assert_eq!(catalogue.authors(), &["Anne Carson", "Zadie Smith"]);
        assert_eq!(catalogue.counts(), (4, 4, 2));
    }

    #[test]
    fn test_empty_catalogue() {
        let catalogue = Catalogue::from_books(Vec::new());
        assert!(catalogue.is_empty());
        assert!(catalogue.genres().is_empty());
        assert!(catalogue.authors().is_empty());
        assert!(catalogue.get(0).is_none());
    }
}
