//! Core domain types for the book catalogue.
//!
//! - [`Book`]: one row of the source dataset
//! - [`PageCount`]: page count cell, which may hold placeholder text
//! - [`Catalogue`]: the immutable in-memory table plus its option indices

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Book record
// =============================================================================

/// One book entry in the dataset.
///
/// Optional columns are explicit: an unrated book has `rating == None`, a
/// book without genres has an empty `genres` list and a book without a page
/// count has `pages == None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    /// Average rating on a 0-5 scale
    pub rating: Option<f64>,
    pub rating_count: u64,
    /// Trimmed genre names in source order, never containing empty entries
    pub genres: Vec<String>,
    pub detail_url: String,
    pub purchase_url: String,
    pub pages: Option<PageCount>,
}

impl Book {
    /// Rating used by numeric comparisons; unrated books count as 0
    pub fn rating_or_zero(&self) -> f64 {
        self.rating.unwrap_or(0.0)
    }

    /// Numeric page count, if the source held one
    pub fn page_count(&self) -> Option<u32> {
        self.pages.as_ref().and_then(PageCount::value)
    }
}

// =============================================================================
// Page count
// =============================================================================

/// Contents of the "No Of Pages" column.
///
/// The source mixes real numbers with placeholder text, so the original text
/// is kept whenever it is not a page count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageCount {
    Known(u32),
    Unrecognised(String),
}

impl PageCount {
    pub fn value(&self) -> Option<u32> {
        match self {
            PageCount::Known(pages) => Some(*pages),
            PageCount::Unrecognised(_) => None,
        }
    }
}

impl fmt::Display for PageCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageCount::Known(pages) => write!(f, "{pages}"),
            PageCount::Unrecognised(text) => f.write_str(text),
        }
    }
}

// =============================================================================
// Catalogue - the in-memory table
// =============================================================================

/// The loaded dataset.
///
/// Records are never mutated after construction. Callers work with views
/// (`Vec<&Book>`) produced from [`Catalogue::books`].
#[derive(Debug, Default)]
pub struct Catalogue {
    pub(crate) books: Vec<Book>,

    // Secondary indices for populating selection controls
    /// Distinct genre names, sorted
    pub(crate) genres: Vec<String>,
    /// Distinct non-empty author names, sorted
    pub(crate) authors: Vec<String>,
}

impl Catalogue {
    /// Build a catalogue from already-parsed records
    pub fn from_books(books: Vec<Book>) -> Self {
        let mut catalogue = Self {
            books,
            genres: Vec::new(),
            authors: Vec::new(),
        };
        catalogue.build_secondary_indices();
        catalogue
    }

    /// All records in source order
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn get(&self, index: usize) -> Option<&Book> {
        self.books.get(index)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Distinct genres across the catalogue, sorted
    pub fn genres(&self) -> &[String] {
        &self.genres
    }

    /// Distinct authors across the catalogue, sorted
    pub fn authors(&self) -> &[String] {
        &self.authors
    }

    /// Counts for logging: (books, distinct genres, distinct authors)
    pub fn counts(&self) -> (usize, usize, usize) {
        (self.books.len(), self.genres.len(), self.authors.len())
    }
}
