//! Filter to keep only books in any of the selected genres.

use crate::traits::Filter;
use catalogue::Book;
use std::collections::HashSet;

/// Keeps books sharing at least one genre with the selection.
///
/// An empty selection places no constraint on the view.
pub struct GenreFilter {
    genres: HashSet<String>,
}

impl GenreFilter {
    pub fn new<I, S>(genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            genres: genres.into_iter().map(Into::into).collect(),
        }
    }
}

impl Filter for GenreFilter {
    fn name(&self) -> &str {
        "GenreFilter"
    }

    fn keep(&self, book: &Book) -> bool {
        self.genres.is_empty() || book.genres.iter().any(|genre| self.genres.contains(genre))
    }
}
