//! Incremental "load more" pagination.
//!
//! The cursor only grows. It is deliberately independent of the criteria in
//! use: changing filters or sort order keeps however many rows the session
//! has already revealed.

/// Rows revealed initially and added by each [`Pagination::advance`]
pub const PAGE_SIZE: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    revealed: usize,
}

impl Pagination {
    pub fn new() -> Self {
        Self {
            revealed: PAGE_SIZE,
        }
    }

    /// Number of rows currently revealed
    pub fn revealed(&self) -> usize {
        self.revealed
    }

    /// Reveal another page. Not capped at the result length; slicing
    /// truncates instead.
    pub fn advance(&mut self) {
        self.revealed = self.revealed.saturating_add(PAGE_SIZE);
    }

    /// The first `min(revealed, len)` elements of `items`
    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[..self.revealed.min(items.len())]
    }

    pub fn has_more<T>(&self, items: &[T]) -> bool {
        self.revealed < items.len()
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_reveals_one_page() {
        let pagination = Pagination::default();
        assert_eq!(pagination.revealed(), 100);

        let items: Vec<u32> = (0..250).collect();
        assert_eq!(pagination.visible(&items).len(), 100);
        assert_eq!(pagination.visible(&items)[99], 99);
        assert!(pagination.has_more(&items));
    }

    #[test]
    fn test_visible_truncates_to_available_rows() {
        let mut pagination = Pagination::new();
        let items: Vec<u32> = (0..150).collect();

        pagination.advance();
        assert_eq!(pagination.revealed(), 200);
        assert_eq!(pagination.visible(&items).len(), 150);
        assert!(!pagination.has_more(&items));

        // Advancing past the end keeps growing
        pagination.advance();
        assert_eq!(pagination.revealed(), 300);
    }

    #[test]
    fn test_exact_fit_has_no_more() {
        let pagination = Pagination::new();
        let items = vec![0u8; 100];
        assert!(!pagination.has_more(&items));

        let empty: [u8; 0] = [];
        assert!(pagination.visible(&empty).is_empty());
        assert!(!pagination.has_more(&empty));
    }
}
