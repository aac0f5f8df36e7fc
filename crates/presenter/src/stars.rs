//! Rating to star-glyph derivation.
//!
//! This is the structured description of a star rating (how many full,
//! partial and empty stars) before anything is drawn. Renderers in
//! [`crate::render`] turn it into text or markup.

use serde::Serialize;

/// Stars drawn for a rated book
pub const MAX_STARS: u8 = 5;

/// Absorbs float error when turning the fractional part into a percentage,
/// e.g. 3.9 - 3.0 == 0.8999999999999999
const FILL_EPSILON: f64 = 1e-6;

/// The single non-full, non-empty star, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PartialStar {
    /// Fractional part in `0.25..0.75`
    Half,
    /// Fractional part of at least 0.75, with the fill percentage
    Fill(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StarGlyphs {
    pub full: u8,
    pub partial: Option<PartialStar>,
    pub empty: u8,
}

impl StarGlyphs {
    pub fn total(&self) -> u8 {
        self.full + u8::from(self.partial.is_some()) + self.empty
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StarRating {
    /// No rating in the source; rendered as "N/A" without glyphs
    NotAvailable,
    Rated { value: f64, glyphs: StarGlyphs },
}

impl StarRating {
    pub fn from_rating(rating: Option<f64>) -> Self {
        match rating {
            Some(value) if !value.is_nan() => StarRating::Rated {
                value,
                glyphs: derive_glyphs(value),
            },
            _ => StarRating::NotAvailable,
        }
    }

    pub fn glyphs(&self) -> Option<&StarGlyphs> {
        match self {
            StarRating::NotAvailable => None,
            StarRating::Rated { glyphs, .. } => Some(glyphs),
        }
    }

    /// Numeric label shown beside the glyphs: one decimal place, or "N/A"
    pub fn label(&self) -> String {
        match self {
            StarRating::NotAvailable => "N/A".to_string(),
            StarRating::Rated { value, .. } => format!("{value:.1}"),
        }
    }
}

fn derive_glyphs(value: f64) -> StarGlyphs {
    let value = value.clamp(0.0, f64::from(MAX_STARS));
    let whole = value.floor();
    let full = whole as u8;
    let decimal = value - whole;

    // Once five full stars are drawn there is no room for a partial star
    let partial = if full >= MAX_STARS {
        None
    } else if decimal >= 0.75 {
        let percent = ((decimal * 100.0) + FILL_EPSILON).floor() as u8;
        Some(PartialStar::Fill(percent.min(99)))
    } else if decimal >= 0.25 {
        Some(PartialStar::Half)
    } else {
        None
    };

    let empty = MAX_STARS
        .saturating_sub(full)
        .saturating_sub(u8::from(partial.is_some()));

    StarGlyphs {
        full,
        partial,
        empty,
    }
}
