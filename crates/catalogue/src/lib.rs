//! # Catalogue Crate
//!
//! This crate loads the book dataset into an immutable in-memory table.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Book, PageCount, Catalogue)
//! - **parser**: Parse the dataset CSV into records
//! - **index**: Load entry point and secondary indices (genres, authors)
//! - **cache**: Load-once cache handing out shared catalogues
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalogue::CatalogueCache;
//! use std::path::Path;
//!
//! let cache = CatalogueCache::new();
//! let catalogue = cache.get_or_load(Path::new("data/goodreads_data_updated.csv"))?;
//!
//! println!("{} books, {} genres", catalogue.len(), catalogue.genres().len());
//! ```

// Public modules
pub mod cache;
pub mod error;
pub mod index;
pub mod parser;
pub mod types;

// Re-export commonly used types for convenience
pub use cache::CatalogueCache;
pub use error::{LoadError, Result};
pub use parser::{parse_genres, MAX_RATING};
pub use types::{Book, Catalogue, PageCount};
