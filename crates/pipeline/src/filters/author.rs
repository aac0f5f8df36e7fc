//! Filter to keep only books by the selected authors.

use crate::traits::Filter;
use catalogue::Book;
use std::collections::HashSet;

/// Keeps books whose author is in the selection (exact match).
///
/// An empty selection places no constraint on the view.
pub struct AuthorFilter {
    authors: HashSet<String>,
}

impl AuthorFilter {
    pub fn new<I, S>(authors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            authors: authors.into_iter().map(Into::into).collect(),
        }
    }
}

impl Filter for AuthorFilter {
    fn name(&self) -> &str {
        "AuthorFilter"
    }

    fn keep(&self, book: &Book) -> bool {
        self.authors.is_empty() || self.authors.contains(&book.author)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(title: &str, author: &str) -> Book {
        Book {
            title: title.to_string(),
            author: author.to_string(),
            rating: Some(4.0),
            rating_count: 10,
            genres: vec![],
            detail_url: String::new(),
            purchase_url: String::new(),
            pages: None,
        }
    }

    #[test]
    fn test_author_filter() {
        let books = vec![
            book("Beloved", "Toni Morrison"),
            book("Ulysses", "James Joyce"),
            book("Sula", "Toni Morrison"),
            book("Lowercase", "toni morrison"),
        ];

        let filter = AuthorFilter::new(["Toni Morrison"]);
        let filtered = filter.apply(books.iter().collect());

        let titles: Vec<&str> = filtered.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["Beloved", "Sula"]);
    }
}
