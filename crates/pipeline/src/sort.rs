//! Sorting of filtered catalogue views.
//!
//! Text fields compare lexicographically, numeric fields numerically.
//! Unrated books and books without a numeric page count sort as the lowest
//! value of their field. Sorting is stable in both directions, so books that
//! tie keep the order they had in the input view.

use crate::error::CriteriaError;
use catalogue::Book;
use rayon::prelude::*;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Column a view can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    RatingCount,
    Rating,
    AuthorName,
    BookTitle,
    PageCount,
}

impl SortField {
    /// All fields, in the order they are offered to users
    pub const ALL: [SortField; 5] = [
        SortField::RatingCount,
        SortField::Rating,
        SortField::AuthorName,
        SortField::BookTitle,
        SortField::PageCount,
    ];

    /// Column label as it appears in the dataset
    pub fn label(&self) -> &'static str {
        match self {
            SortField::RatingCount => "No Of Rating",
            SortField::Rating => "Rating",
            SortField::AuthorName => "Author Name",
            SortField::BookTitle => "Book Title",
            SortField::PageCount => "No Of Pages",
        }
    }

    /// Ascending comparison of two books on this field
    pub fn compare(&self, a: &Book, b: &Book) -> Ordering {
        match self {
            SortField::RatingCount => a.rating_count.cmp(&b.rating_count),
            SortField::Rating => compare_missing_lowest(a.rating, b.rating),
            SortField::AuthorName => a.author.cmp(&b.author),
            SortField::BookTitle => a.title.cmp(&b.title),
            SortField::PageCount => a.page_count().cmp(&b.page_count()),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SortField {
    type Err = CriteriaError;

    /// Accepts the dataset label ("No Of Rating") or a short alias
    /// ("ratings", "rating-count", "title", ...), ignoring case and separators
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "noofrating" | "ratingcount" | "ratings" | "count" => Ok(SortField::RatingCount),
            "rating" => Ok(SortField::Rating),
            "authorname" | "author" => Ok(SortField::AuthorName),
            "booktitle" | "title" => Ok(SortField::BookTitle),
            "noofpages" | "pagecount" | "pages" => Ok(SortField::PageCount),
            _ => Err(CriteriaError::InvalidSortField(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Ascending => f.write_str("Ascending"),
            SortOrder::Descending => f.write_str("Descending"),
        }
    }
}

impl FromStr for SortOrder {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ascending" | "asc" => Ok(SortOrder::Ascending),
            "descending" | "desc" => Ok(SortOrder::Descending),
            _ => Err(CriteriaError::InvalidSortOrder(s.to_string())),
        }
    }
}

/// Field plus direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortCriteria {
    pub field: SortField,
    pub order: SortOrder,
}

impl SortCriteria {
    pub fn new(field: SortField, order: SortOrder) -> Self {
        Self { field, order }
    }
}

impl Default for SortCriteria {
    fn default() -> Self {
        Self::new(SortField::RatingCount, SortOrder::Descending)
    }
}

/// Sort a view in place.
///
/// `par_sort_by` is a stable merge sort; descending order flips the
/// comparator rather than reversing the result so ties keep input order.
pub fn sort_books(books: &mut [&Book], criteria: SortCriteria) {
    let field = criteria.field;
    match criteria.order {
        SortOrder::Ascending => books.par_sort_by(|a, b| field.compare(a, b)),
        SortOrder::Descending => books.par_sort_by(|a, b| field.compare(b, a)),
    }
}

fn compare_missing_lowest(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(x), Some(y)) => x.total_cmp(&y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalogue::PageCount;

    fn book(title: &str, author: &str, rating: Option<f64>, count: u64, pages: Option<PageCount>) -> Book {
        Book {
            title: title.to_string(),
            author: author.to_string(),
            rating,
            rating_count: count,
            genres: vec![],
            detail_url: String::new(),
            purchase_url: String::new(),
            pages,
        }
    }

    fn titles(books: &[&Book]) -> Vec<String> {
        books.iter().map(|b| b.title.clone()).collect()
    }

    #[test]
    fn test_sort_by_rating_descending_puts_unrated_last() {
        let books = vec![
            book("Mid", "A", Some(3.5), 1, None),
            book("Unrated", "A", None, 1, None),
            book("Top", "A", Some(4.9), 1, None),
            book("Zero", "A", Some(0.0), 1, None),
        ];
        let mut view: Vec<&Book> = books.iter().collect();

        sort_books(&mut view, SortCriteria::new(SortField::Rating, SortOrder::Descending));
        assert_eq!(titles(&view), vec!["Top", "Mid", "Zero", "Unrated"]);

        sort_books(&mut view, SortCriteria::new(SortField::Rating, SortOrder::Ascending));
        assert_eq!(titles(&view), vec!["Unrated", "Zero", "Mid", "Top"]);
    }

    #[test]
    fn test_sort_is_stable_in_both_directions() {
        let books = vec![
            book("first", "A", Some(4.0), 1, None),
            book("low", "A", Some(2.0), 1, None),
            book("second", "A", Some(4.0), 1, None),
            book("third", "A", Some(4.0), 1, None),
        ];

        let mut view: Vec<&Book> = books.iter().collect();
        sort_books(&mut view, SortCriteria::new(SortField::Rating, SortOrder::Descending));
        assert_eq!(titles(&view), vec!["first", "second", "third", "low"]);

        let mut view: Vec<&Book> = books.iter().collect();
        sort_books(&mut view, SortCriteria::new(SortField::Rating, SortOrder::Ascending));
        assert_eq!(titles(&view), vec!["low", "first", "second", "third"]);
    }

    #[test]
    fn test_placeholder_pages_sort_lowest() {
        let books = vec![
            book("Long", "A", None, 1, Some(PageCount::Known(900))),
            book("Placeholder", "A", None, 1, Some(PageCount::Unrecognised("n/a".into()))),
            book("Short", "A", None, 1, Some(PageCount::Known(90))),
            book("Missing", "A", None, 1, None),
        ];
        let mut view: Vec<&Book> = books.iter().collect();

        sort_books(&mut view, SortCriteria::new(SortField::PageCount, SortOrder::Ascending));
        assert_eq!(titles(&view), vec!["Placeholder", "Missing", "Short", "Long"]);
    }

    #[test]
    fn test_text_fields_sort_lexicographically() {
        let books = vec![
            book("beta", "Carol", None, 3, None),
            book("Alpha", "alice", None, 1, None),
            book("Gamma", "Bob", None, 2, None),
        ];
        let mut view: Vec<&Book> = books.iter().collect();

        sort_books(&mut view, SortCriteria::new(SortField::BookTitle, SortOrder::Ascending));
        assert_eq!(titles(&view), vec!["Alpha", "Gamma", "beta"]);

        sort_books(&mut view, SortCriteria::new(SortField::AuthorName, SortOrder::Ascending));
        assert_eq!(titles(&view), vec!["Gamma", "beta", "Alpha"]);

        sort_books(&mut view, SortCriteria::new(SortField::RatingCount, SortOrder::Descending));
        assert_eq!(titles(&view), vec!["beta", "Gamma", "Alpha"]);
    }

    #[test]
    fn test_parse_sort_field() {
        assert_eq!("No Of Rating".parse::<SortField>(), Ok(SortField::RatingCount));
        assert_eq!("rating-count".parse::<SortField>(), Ok(SortField::RatingCount));
        assert_eq!("Book Title".parse::<SortField>(), Ok(SortField::BookTitle));
        assert_eq!("pages".parse::<SortField>(), Ok(SortField::PageCount));
        assert_eq!(
            "Publisher".parse::<SortField>(),
            Err(CriteriaError::InvalidSortField("Publisher".to_string()))
        );

        for field in SortField::ALL {
            assert_eq!(field.label().parse::<SortField>(), Ok(field));
        }
    }

    #[test]
    fn test_parse_sort_order() {
        assert_eq!("Ascending".parse::<SortOrder>(), Ok(SortOrder::Ascending));
        assert_eq!("desc".parse::<SortOrder>(), Ok(SortOrder::Descending));
        assert!("sideways".parse::<SortOrder>().is_err());
        assert_eq!(SortOrder::default(), SortOrder::Descending);
    }
}
