//! Parser for the book dataset CSV.
//!
//! Expected header columns (any order, extra columns ignored):
//! `Book Title, Author Name, Rating, No Of Rating, Genres List, Detail Url,
//! Amazon Link, No Of Pages`
//!
//! Rows are first deserialized into a loose [`RawBookRow`] of strings, then
//! converted into [`Book`] values in parallel. Conversion is where the
//! per-field policies live:
//! - `Rating`: empty / `nan` means unrated, otherwise a number in 0..=5
//! - `No Of Rating`: required; `1234`, `1,234` and `1234.0` are accepted
//! - `Genres List`: comma-separated, trimmed, empty entries dropped
//! - `No Of Pages`: a page count, or placeholder text kept verbatim

use crate::error::{LoadError, Result};
use crate::types::{Book, PageCount};
use rayon::prelude::*;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Upper bound of the rating scale
pub const MAX_RATING: f64 = 5.0;

/// One CSV row before any field conversion
#[derive(Debug, Deserialize)]
struct RawBookRow {
    #[serde(rename = "Book Title")]
    title: String,
    #[serde(rename = "Author Name")]
    author: String,
    #[serde(rename = "Rating", default)]
    rating: Option<String>,
    #[serde(rename = "No Of Rating", default)]
    rating_count: Option<String>,
    #[serde(rename = "Genres List", default)]
    genres: Option<String>,
    #[serde(rename = "Detail Url", default)]
    detail_url: String,
    #[serde(rename = "Amazon Link", default)]
    purchase_url: String,
    #[serde(rename = "No Of Pages", default)]
    pages: Option<String>,
}

impl RawBookRow {
    fn into_book(self, line: u64) -> Result<Book> {
        let rating = parse_rating(self.rating.as_deref(), line)?;
        let rating_count = parse_rating_count(self.rating_count.as_deref(), line)?;
        let genres = present(self.genres.as_deref())
            .map(parse_genres)
            .unwrap_or_default();
        let pages = parse_pages(self.pages.as_deref());

        Ok(Book {
            title: self.title,
            author: self.author.trim().to_string(),
            rating,
            rating_count,
            genres,
            detail_url: self.detail_url,
            purchase_url: self.purchase_url,
            pages,
        })
    }
}

/// Parse the dataset file at `path`
pub fn parse_books(path: &Path) -> Result<Vec<Book>> {
    if !path.exists() {
        return Err(LoadError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    let file = File::open(path)?;
    parse_books_from_reader(BufReader::new(file))
}

/// Parse CSV data from any reader
pub fn parse_books_from_reader<R: Read>(source: R) -> Result<Vec<Book>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(source);

    let headers = reader.headers()?.clone();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let row: RawBookRow =
            record
                .deserialize(Some(&headers))
                .map_err(|e| LoadError::ParseError {
                    line,
                    reason: e.to_string(),
                })?;
        rows.push((line, row));
    }

    // Indexed parallel iterators keep source order when collecting
    rows.into_par_iter()
        .map(|(line, row)| row.into_book(line))
        .collect()
}

/// Split a "Genres List" cell into trimmed, non-empty genre names
///
/// Example: "Fiction, Drama ,,War" -> ["Fiction", "Drama", "War"]
pub fn parse_genres(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|genre| !genre.is_empty())
        .map(str::to_string)
        .collect()
}

/// Empty cells and pandas-style `nan` both mean "no value"
fn is_missing(text: &str) -> bool {
    text.is_empty() || text.eq_ignore_ascii_case("nan")
}

fn present(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|text| !is_missing(text))
}

fn parse_rating(raw: Option<&str>, line: u64) -> Result<Option<f64>> {
    let Some(text) = present(raw) else {
        return Ok(None);
    };

    let value: f64 = text.parse().map_err(|_| LoadError::InvalidValue {
        line,
        field: "Rating",
        value: text.to_string(),
    })?;

    if !(0.0..=MAX_RATING).contains(&value) {
        return Err(LoadError::InvalidValue {
            line,
            field: "Rating",
            value: text.to_string(),
        });
    }
    Ok(Some(value))
}

fn parse_rating_count(raw: Option<&str>, line: u64) -> Result<u64> {
    let text = present(raw).ok_or(LoadError::MissingValue {
        line,
        field: "No Of Rating",
    })?;

    parse_whole_number(text).ok_or_else(|| LoadError::InvalidValue {
        line,
        field: "No Of Rating",
        value: text.to_string(),
    })
}

fn parse_pages(raw: Option<&str>) -> Option<PageCount> {
    let text = present(raw)?;
    let pages = parse_whole_number(text)
        .and_then(|n| u32::try_from(n).ok())
        .map(PageCount::Known)
        .unwrap_or_else(|| PageCount::Unrecognised(text.to_string()));
    Some(pages)
}

/// Accepts "1234", "1,234" and integral floats such as "1234.0"
fn parse_whole_number(text: &str) -> Option<u64> {
    let digits: String = text.chars().filter(|c| *c != ',').collect();
    if let Ok(n) = digits.parse::<u64>() {
        return Some(n);
    }
    let float: f64 = digits.parse().ok()?;
    if float.is_finite() && float >= 0.0 && float.fract() == 0.0 && float <= u64::MAX as f64 {
        Some(float as u64)
    } else {
        None
    }
}
