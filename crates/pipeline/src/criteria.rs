//! Filter criteria built from user selections.
//!
//! Criteria are rebuilt for every interaction and turned into a
//! [`FilterPipeline`] on demand.

use crate::error::{CriteriaError, Result};
use crate::filter_pipeline::FilterPipeline;
use crate::filters::{AuthorFilter, GenreFilter, MinimumRatingFilter};
use std::collections::BTreeSet;

/// Highest selectable minimum rating
pub const MAX_MIN_RATING: u8 = 5;

/// Minimum rating, genre selection and author selection.
///
/// Empty genre/author sets mean "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    min_rating: u8,
    genres: BTreeSet<String>,
    authors: BTreeSet<String>,
}

impl FilterCriteria {
    pub fn new<G, A>(min_rating: u8, genres: G, authors: A) -> Result<Self>
    where
        G: IntoIterator<Item = String>,
        A: IntoIterator<Item = String>,
    {
        let mut criteria = Self::default();
        criteria.set_min_rating(min_rating)?;
        criteria.genres = genres.into_iter().collect();
        criteria.authors = authors.into_iter().collect();
        Ok(criteria)
    }

    pub fn min_rating(&self) -> u8 {
        self.min_rating
    }

    pub fn genres(&self) -> &BTreeSet<String> {
        &self.genres
    }

    pub fn authors(&self) -> &BTreeSet<String> {
        &self.authors
    }

    pub fn set_min_rating(&mut self, min_rating: u8) -> Result<()> {
        if min_rating > MAX_MIN_RATING {
            return Err(CriteriaError::InvalidMinRating {
                value: min_rating,
                max: MAX_MIN_RATING,
            });
        }
        self.min_rating = min_rating;
        Ok(())
    }

    /// Returns false if the genre was already selected
    pub fn select_genre(&mut self, genre: impl Into<String>) -> bool {
        self.genres.insert(genre.into())
    }

    pub fn deselect_genre(&mut self, genre: &str) -> bool {
        self.genres.remove(genre)
    }

    pub fn select_author(&mut self, author: impl Into<String>) -> bool {
        self.authors.insert(author.into())
    }

    pub fn deselect_author(&mut self, author: &str) -> bool {
        self.authors.remove(author)
    }

    /// Build the filter pipeline for these criteria.
    ///
    /// Genre and author stages are only added when a selection exists.
    pub fn pipeline(&self) -> FilterPipeline {
        let mut pipeline = FilterPipeline::new();
        if !self.genres.is_empty() {
            pipeline = pipeline.add_filter(GenreFilter::new(self.genres.iter().cloned()));
        }
        if !self.authors.is_empty() {
            pipeline = pipeline.add_filter(AuthorFilter::new(self.authors.iter().cloned()));
        }
        pipeline.add_filter(MinimumRatingFilter::new(self.min_rating))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_rating_above_five() {
        let err = FilterCriteria::new(6, vec![], vec![]).unwrap_err();
        assert_eq!(err, CriteriaError::InvalidMinRating { value: 6, max: 5 });

        let mut criteria = FilterCriteria::default();
        assert!(criteria.set_min_rating(9).is_err());
        assert_eq!(criteria.min_rating(), 0);
    }

    #[test]
    fn test_pipeline_only_includes_active_stages() {
        let criteria = FilterCriteria::default();
        assert_eq!(criteria.pipeline().filter_names(), vec!["MinimumRatingFilter"]);

        let criteria = FilterCriteria::new(
            3,
            vec!["Fantasy".to_string()],
            vec!["Ursula K. Le Guin".to_string()],
        )
        .unwrap();
        assert_eq!(
            criteria.pipeline().filter_names(),
            vec!["GenreFilter", "AuthorFilter", "MinimumRatingFilter"]
        );
    }

    #[test]
    fn test_select_and_deselect() {
        let mut criteria = FilterCriteria::default();
        assert!(criteria.select_genre("Poetry"));
        assert!(!criteria.select_genre("Poetry"));
        assert!(criteria.select_author("Mary Oliver"));

        assert!(criteria.deselect_genre("Poetry"));
        assert!(!criteria.deselect_genre("Poetry"));
        assert!(criteria.genres().is_empty());
        assert_eq!(criteria.authors().len(), 1);
    }
}
