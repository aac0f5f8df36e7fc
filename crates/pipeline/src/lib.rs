//! Filter, sort and pagination pipeline over the book catalogue.
//!
//! This crate provides:
//! - Filter trait and implementations (minimum rating, genre, author)
//! - FilterPipeline for composing filters
//! - FilterCriteria to build a pipeline from user selections
//! - Stable sorting by any supported column
//! - Pagination with "load more" semantics
//!
//! ## Architecture
//! Every interaction runs the same stages over a shared, read-only catalogue:
//! 1. Filters narrow the catalogue to a view (`Vec<&Book>`), keeping order
//! 2. The view is sorted by the selected field and direction
//! 3. Pagination reveals a prefix of the sorted view
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{FilterCriteria, Pagination, SortCriteria, SortField, SortOrder, sort_books};
//!
//! let criteria = FilterCriteria::new(4, vec![], vec![])?;
//! let mut view = criteria.pipeline().apply(catalogue.books());
//! sort_books(&mut view, SortCriteria::new(SortField::Rating, SortOrder::Descending));
//!
//! let pagination = Pagination::new();
//! let rows = pagination.visible(&view);
//! ```

pub mod criteria;
pub mod error;
pub mod filter_pipeline;
pub mod filters;
pub mod pagination;
pub mod sort;
pub mod traits;

// Re-export main types
pub use criteria::{FilterCriteria, MAX_MIN_RATING};
pub use error::CriteriaError;
pub use filter_pipeline::FilterPipeline;
pub use pagination::{Pagination, PAGE_SIZE};
pub use sort::{sort_books, SortCriteria, SortField, SortOrder};
pub use traits::Filter;
