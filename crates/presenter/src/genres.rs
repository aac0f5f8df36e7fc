//! Truncated, expandable genre list for a row.

use serde::Serialize;

/// Genres shown before the "more" affordance
pub const PREVIEW_LEN: usize = 2;

const SEPARATOR: &str = ", ";

/// Genre cell state for one rendered row.
///
/// Expansion is one-way: once the full list is revealed the "more"
/// affordance disappears for the rest of the row's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenrePreview {
    genres: Vec<String>,
    expanded: bool,
}

impl GenrePreview {
    pub fn new(genres: &[String]) -> Self {
        Self {
            genres: genres.to_vec(),
            expanded: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.genres.is_empty()
    }

    pub fn len(&self) -> usize {
        self.genres.len()
    }

    /// Genres hidden behind the "more" affordance while collapsed
    pub fn hidden_count(&self) -> usize {
        if self.shows_more() {
            self.genres.len() - PREVIEW_LEN
        } else {
            0
        }
    }

    /// First two genres joined by ", "
    pub fn preview(&self) -> String {
        self.genres
            .iter()
            .take(PREVIEW_LEN)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(SEPARATOR)
    }

    /// Every genre joined by ", "
    pub fn full(&self) -> String {
        self.genres.join(SEPARATOR)
    }

    /// Whether there is anything beyond the preview
    pub fn is_truncated(&self) -> bool {
        self.genres.len() > PREVIEW_LEN
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Whether the "more" affordance should be offered
    pub fn shows_more(&self) -> bool {
        self.is_truncated() && !self.expanded
    }

    /// Reveal the full list. Has no effect on short lists or when already
    /// expanded; there is no way back.
    pub fn expand(&mut self) {
        if self.is_truncated() {
            self.expanded = true;
        }
    }

    /// Text currently on display
    pub fn display(&self) -> String {
        if self.shows_more() {
            self.preview()
        } else {
            self.full()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preview(genres: &[&str]) -> GenrePreview {
        let genres: Vec<String> = genres.iter().map(|g| g.to_string()).collect();
        GenrePreview::new(&genres)
    }

    #[test]
    fn test_long_list_is_truncated() {
        let mut genres = preview(&["Fiction", "Drama", "War", "History"]);

        assert_eq!(genres.preview(), "Fiction, Drama");
        assert!(genres.shows_more());
        assert_eq!(genres.display(), "Fiction, Drama");
        assert_eq!(genres.hidden_count(), 2);

        genres.expand();
        assert!(genres.is_expanded());
        assert_eq!(genres.hidden_count(), 0);
        assert!(!genres.shows_more());
        assert_eq!(genres.display(), "Fiction, Drama, War, History");

        // One-way: expanding again changes nothing
        genres.expand();
        assert!(!genres.shows_more());
    }

    #[test]
    fn test_short_list_is_plain() {
        let mut genres = preview(&["Fiction", "Drama"]);

        assert!(!genres.is_truncated());
        assert!(!genres.shows_more());
        assert_eq!(genres.display(), "Fiction, Drama");

        genres.expand();
        assert!(!genres.is_expanded());
    }

    #[test]
    fn test_three_genres_need_more() {
        let genres = preview(&["Fiction", "Drama", "War"]);
        assert!(genres.shows_more());
        assert_eq!(genres.full(), "Fiction, Drama, War");
    }

    #[test]
    fn test_no_genres() {
        let genres = preview(&[]);
        assert!(genres.is_empty());
        assert_eq!(genres.display(), "");
        assert!(!genres.shows_more());
    }
}
