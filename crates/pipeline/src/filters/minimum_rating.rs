//! Filter on a minimum star rating.
//!
//! Unrated books count as rated 0, so they survive a floor of 0 and fail
//! every higher floor.

use crate::traits::Filter;
use catalogue::Book;

/// Removes books rated below a whole-star floor.
pub struct MinimumRatingFilter {
    min_rating: u8,
}

impl MinimumRatingFilter {
    /// Create a new MinimumRatingFilter.
    ///
    /// # Arguments
    /// * `min_rating` - Floor on the 0-5 scale; callers validate the range
    pub fn new(min_rating: u8) -> Self {
        Self { min_rating }
    }
}

impl Filter for MinimumRatingFilter {
    fn name(&self) -> &str {
        "MinimumRatingFilter"
    }

    fn keep(&self, book: &Book) -> bool {
        book.rating_or_zero() >= f64::from(self.min_rating)
    }
}
