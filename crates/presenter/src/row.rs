//! Display-ready rows.

use crate::genres::GenrePreview;
use crate::stars::StarRating;
use catalogue::Book;
use serde::Serialize;

/// Shown for a missing page count
pub const NOT_AVAILABLE: &str = "N/A";

/// One book prepared for a presentation surface.
///
/// Built fresh from a [`Book`] for every interaction; the only state it
/// carries is the genre cell's expansion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookRow {
    pub title: String,
    pub author: String,
    pub stars: StarRating,
    /// Rating count with thousands separators, e.g. "1,234,567"
    pub rating_count: String,
    pub genres: GenrePreview,
    pub detail_url: String,
    pub purchase_url: String,
    pub pages: String,
}

impl BookRow {
    pub fn from_book(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            stars: StarRating::from_rating(book.rating),
            rating_count: format_thousands(book.rating_count),
            genres: GenrePreview::new(&book.genres),
            detail_url: book.detail_url.clone(),
            purchase_url: book.purchase_url.clone(),
            pages: book
                .pages
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        }
    }
}

/// Format an integer with comma thousands separators
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
