//! # Catalogue Browser
//!
//! This module coordinates one browsing interaction:
//! 1. Record the interaction on the session (advancing on "load more")
//! 2. Apply the filter pipeline built from the request's criteria
//! 3. Sort the filtered view
//! 4. Slice the revealed prefix
//! 5. Present each visible book as a row
//!
//! The catalogue is shared read-only, so one browser can serve any number of
//! sessions at once.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info};

use catalogue::{Book, Catalogue, CatalogueCache};
use pipeline::{sort_books, FilterCriteria, SortCriteria};
use presenter::BookRow;

use crate::session::{BrowseRequest, BrowseSession};

/// Output of one interaction, ready for a presentation layer
#[derive(Debug, Clone)]
pub struct BrowseView {
    pub rows: Vec<BookRow>,
    /// Books matching the criteria, revealed or not
    pub total_matches: usize,
    pub revealed: usize,
    pub has_more: bool,
}

#[derive(Debug, Clone)]
pub struct CatalogueBrowser {
    catalogue: Arc<Catalogue>,
}

impl CatalogueBrowser {
    pub fn new(catalogue: Arc<Catalogue>) -> Self {
        Self { catalogue }
    }

    /// Load (or reuse) the catalogue at `path` through `cache`
    pub fn open(cache: &CatalogueCache, path: &Path) -> Result<Self> {
        let catalogue = cache
            .get_or_load(path)
            .with_context(|| format!("Failed to load book catalogue from {}", path.display()))?;
        Ok(Self::new(catalogue))
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    /// Distinct genres for the genre selection control
    pub fn genre_options(&self) -> &[String] {
        self.catalogue.genres()
    }

    /// Distinct authors for the author selection control
    pub fn author_options(&self) -> &[String] {
        self.catalogue.authors()
    }

    /// Handle one interaction.
    ///
    /// Takes the session by value and hands back its successor. The cursor
    /// is never reset here, even when the criteria differ from the previous
    /// interaction.
    pub fn browse(
        &self,
        mut session: BrowseSession,
        request: &BrowseRequest,
    ) -> (BrowseSession, BrowseView) {
        let start_time = Instant::now();
        session.record_interaction(request.action);

        let mut matches = self.apply_filters(&request.criteria);
        self.sort(&mut matches, request.sort);

        let pagination = session.pagination();
        let rows = Self::present(pagination.visible(&matches));

        let view = BrowseView {
            total_matches: matches.len(),
            revealed: pagination.revealed(),
            has_more: pagination.has_more(&matches),
            rows,
        };

        info!(
            "Browse ({:?}, sort {} {}): {} matches, showing {}, more: {} in {:.2?}",
            request.action,
            request.sort.field,
            request.sort.order,
            view.total_matches,
            view.rows.len(),
            view.has_more,
            start_time.elapsed()
        );
        (session, view)
    }

    /// Apply the filter pipeline built from `criteria`
    fn apply_filters(&self, criteria: &FilterCriteria) -> Vec<&Book> {
        debug!(
            "Filtering {} books (min rating {}, {} genres, {} authors)",
            self.catalogue.len(),
            criteria.min_rating(),
            criteria.genres().len(),
            criteria.authors().len()
        );
        criteria.pipeline().apply(self.catalogue.books())
    }

    fn sort(&self, matches: &mut [&Book], sort: SortCriteria) {
        debug!("Sorting {} books by {} {}", matches.len(), sort.field, sort.order);
        sort_books(matches, sort);
    }

    fn present(visible: &[&Book]) -> Vec<BookRow> {
        visible.iter().map(|book| BookRow::from_book(book)).collect()
    }
}
