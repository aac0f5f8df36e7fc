//! Row presentation for the book catalogue.
//!
//! Turns a [`catalogue::Book`] into a display-ready [`BookRow`]:
//! - **stars**: rating to star-glyph description (full / half / partial / empty)
//! - **genres**: first-two-genres preview with a one-way "more" expansion
//! - **row**: the assembled row, with formatted counts and page text
//! - **render**: text and HTML renderers for rows
//!
//! Everything except `render` is pure derivation and can be tested without
//! an output surface.

pub mod genres;
pub mod render;
pub mod row;
pub mod stars;

pub use genres::{GenrePreview, PREVIEW_LEN};
pub use render::{escape_html, HtmlRenderer, RowRenderer, TextRenderer};
pub use row::{format_thousands, BookRow};
pub use stars::{PartialStar, StarGlyphs, StarRating, MAX_STARS};
