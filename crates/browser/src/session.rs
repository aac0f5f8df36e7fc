//! Per-session browsing state.
//!
//! A session is an explicit value owned by the caller: it goes into every
//! interaction and comes back out, possibly advanced. Nothing about a session
//! is stored in the browser or shared between sessions.

use pipeline::{FilterCriteria, Pagination, SortCriteria};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowseSession {
    pagination: Pagination,
    interactions: u64,
}

impl BrowseSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    /// Rows currently revealed
    pub fn revealed(&self) -> usize {
        self.pagination.revealed()
    }

    /// Interactions handled so far in this session
    pub fn interactions(&self) -> u64 {
        self.interactions
    }

    pub(crate) fn record_interaction(&mut self, action: BrowseAction) {
        if action == BrowseAction::LoadMore {
            self.pagination.advance();
        }
        self.interactions += 1;
    }
}

/// What triggered an interaction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BrowseAction {
    /// Re-evaluate with the current criteria
    #[default]
    Refresh,
    /// Reveal another page, then re-evaluate
    LoadMore,
}

/// Everything the user selected for one interaction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowseRequest {
    pub criteria: FilterCriteria,
    pub sort: SortCriteria,
    pub action: BrowseAction,
}

impl BrowseRequest {
    pub fn new(criteria: FilterCriteria, sort: SortCriteria) -> Self {
        Self {
            criteria,
            sort,
            action: BrowseAction::Refresh,
        }
    }

    /// Same selections, with the "load more" trigger pressed
    pub fn load_more(&self) -> Self {
        Self {
            action: BrowseAction::LoadMore,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pipeline::PAGE_SIZE;

    #[test]
    fn test_new_session_reveals_one_page() {
        let session = BrowseSession::new();
        assert_eq!(session.revealed(), PAGE_SIZE);
        assert_eq!(session.interactions(), 0);
    }

    #[test]
    fn test_only_load_more_advances() {
        let mut session = BrowseSession::new();
        session.record_interaction(BrowseAction::Refresh);
        assert_eq!(session.revealed(), 100);

        session.record_interaction(BrowseAction::LoadMore);
        session.record_interaction(BrowseAction::LoadMore);
        assert_eq!(session.revealed(), 300);
        assert_eq!(session.interactions(), 3);
    }

    #[test]
    fn test_load_more_request_keeps_selections() {
        let mut criteria = FilterCriteria::default();
        criteria.select_author("Octavia E. Butler");
        let request = BrowseRequest::new(criteria.clone(), SortCriteria::default());

        let more = request.load_more();
        assert_eq!(more.action, BrowseAction::LoadMore);
        assert_eq!(more.criteria, criteria);
        assert_eq!(request.action, BrowseAction::Refresh);
    }
}
