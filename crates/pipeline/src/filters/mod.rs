//! Filter implementations for the catalogue pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod author;
pub mod genre;
pub mod minimum_rating;

// Re-export for convenience
pub use author::AuthorFilter;
pub use genre::GenreFilter;
pub use minimum_rating::MinimumRatingFilter;
