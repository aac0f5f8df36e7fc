//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible predicates to be applied to a catalogue view.

use catalogue::Book;
use rayon::prelude::*;

/// Core trait for filtering books.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows predicates to be evaluated on rayon worker threads
/// - Filters take a view (`Vec<&Book>`) and return a narrower view; records
///   are never copied or altered
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether `book` satisfies this filter's predicate
    fn keep(&self, book: &Book) -> bool;

    /// Apply this filter to a view of the catalogue.
    ///
    /// Surviving books keep their relative order.
    fn apply<'a>(&self, books: Vec<&'a Book>) -> Vec<&'a Book> {
        books
            .into_par_iter()
            .filter(|book| self.keep(book))
            .collect()
    }
}
