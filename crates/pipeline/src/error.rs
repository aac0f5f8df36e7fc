//! Errors raised while turning user selections into criteria.
//!
//! These are rejected at the interface boundary; the filter and sort
//! engines assume valid criteria.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CriteriaError {
    /// Requested sort column is not one of the supported fields
    #[error("Unknown sort field: {0:?}")]
    InvalidSortField(String),

    #[error("Unknown sort order: {0:?} (expected ascending or descending)")]
    InvalidSortOrder(String),

    /// Minimum rating outside the 0-5 star scale
    #[error("Minimum rating must be between 0 and {max}, got {value}")]
    InvalidMinRating { value: u8, max: u8 },
}

pub type Result<T> = std::result::Result<T, CriteriaError>;
