//! Rendering of presenter rows onto an output surface.
//!
//! Derivation lives in [`crate::stars`] and [`crate::genres`]; the renderers
//! here only turn those descriptions into text or markup.

use crate::genres::GenrePreview;
use crate::row::BookRow;
use crate::stars::{PartialStar, StarRating};

pub trait RowRenderer {
    fn render_stars(&self, stars: &StarRating) -> String;

    fn render_genres(&self, genres: &GenrePreview) -> String;

    fn render_row(&self, row: &BookRow) -> String;

    /// Render every row, one per line
    fn render_rows(&self, rows: &[BookRow]) -> String {
        rows.iter()
            .map(|row| self.render_row(row))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

// =============================================================================
// Plain text
// =============================================================================

/// Terminal output using Unicode star glyphs
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl TextRenderer {
    pub const FULL_STAR: char = '★';
    pub const HALF_STAR: char = '⯪';
    /// A star filled 75% or more
    pub const PARTIAL_STAR: char = '⭑';
    pub const EMPTY_STAR: char = '☆';
}

impl RowRenderer for TextRenderer {
    fn render_stars(&self, stars: &StarRating) -> String {
        let Some(glyphs) = stars.glyphs() else {
            return stars.label();
        };

        let mut out = String::new();
        out.extend(std::iter::repeat_n(Self::FULL_STAR, glyphs.full.into()));
        match glyphs.partial {
            Some(PartialStar::Half) => out.push(Self::HALF_STAR),
            Some(PartialStar::Fill(_)) => out.push(Self::PARTIAL_STAR),
            None => {}
        }
        out.extend(std::iter::repeat_n(Self::EMPTY_STAR, glyphs.empty.into()));
        out.push(' ');
        out.push_str(&stars.label());
        out
    }

    fn render_genres(&self, genres: &GenrePreview) -> String {
        if genres.shows_more() {
            format!("{} (+{} more)", genres.preview(), genres.hidden_count())
        } else {
            genres.display()
        }
    }

    fn render_row(&self, row: &BookRow) -> String {
        format!(
            "{} | {} | {} | {} ratings | {} | {} pages",
            row.title,
            row.author,
            self.render_stars(&row.stars),
            row.rating_count,
            self.render_genres(&row.genres),
            row.pages
        )
    }
}

// =============================================================================
// HTML
// =============================================================================

/// Star path shared by the half and partial glyphs
const STAR_PATH: &str = "M12 .587l3.668 7.568L24 9.75l-6 5.847L19.335 24 12 20.01 4.665 24 6 15.597 0 9.75l8.332-1.595z";

const FILLED_COLOR: &str = "gold";
const EMPTY_COLOR: &str = "#ddd";

/// HTML fragments: star spans, gradient-filled SVG stars and a `<details>`
/// element for long genre lists. All dataset text is escaped.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    fn star_span(color: &str) -> String {
        format!("<span style='color: {color}; font-size: 18px; line-height: 1;'>★</span>")
    }

    fn gradient_star(id: &str, percent: u8) -> String {
        format!(
            "<svg width=\"18\" height=\"18\" viewBox=\"0 0 24 24\">\
             <defs><linearGradient id=\"{id}\" x1=\"0%\" y1=\"0%\" x2=\"100%\" y2=\"0%\">\
             <stop offset=\"{percent}%\" stop-color=\"{FILLED_COLOR}\"/>\
             <stop offset=\"{percent}%\" stop-color=\"{EMPTY_COLOR}\"/>\
             </linearGradient></defs>\
             <path fill=\"url(#{id})\" d=\"{STAR_PATH}\"/></svg>"
        )
    }

    fn link(href: &str, text: &str) -> String {
        format!("<a href=\"{}\">{}</a>", escape_html(href), text)
    }
}

impl RowRenderer for HtmlRenderer {
    fn render_stars(&self, stars: &StarRating) -> String {
        let Some(glyphs) = stars.glyphs() else {
            return format!("<span class='rating-value'>{}</span>", stars.label());
        };

        let mut out = String::from("<div class='rating-container'><div class='rating-stars'>");
        for _ in 0..glyphs.full {
            out.push_str(&Self::star_span(FILLED_COLOR));
        }
        match glyphs.partial {
            Some(PartialStar::Half) => out.push_str(&Self::gradient_star("half-grad", 50)),
            Some(PartialStar::Fill(percent)) => {
                out.push_str(&Self::gradient_star(&format!("partial-grad-{percent}"), percent))
            }
            None => {}
        }
        for _ in 0..glyphs.empty {
            out.push_str(&Self::star_span(EMPTY_COLOR));
        }
        out.push_str(&format!(
            "</div><span class='rating-value'>{}</span></div>",
            stars.label()
        ));
        out
    }

    fn render_genres(&self, genres: &GenrePreview) -> String {
        if genres.is_empty() {
            return String::new();
        }
        if genres.shows_more() {
            format!(
                "<div class='book-content'>{}, <details style=\"display:inline;\">\
                 <summary>more</summary><div>{}</div></details></div>",
                escape_html(&genres.preview()),
                escape_html(&genres.full())
            )
        } else {
            format!("<div class='book-content'>{}</div>", escape_html(&genres.display()))
        }
    }

    fn render_row(&self, row: &BookRow) -> String {
        let cells = [
            format!("<div class='book-title'>{}</div>", escape_html(&row.title)),
            format!("<div class='book-content'>{}</div>", escape_html(&row.author)),
            self.render_stars(&row.stars),
            format!("<div class='book-content'>{}</div>", row.rating_count),
            self.render_genres(&row.genres),
            Self::link(&row.detail_url, "Goodreads"),
            Self::link(&row.purchase_url, "Amazon"),
            format!("<div class='book-content'>{}</div>", escape_html(&row.pages)),
        ];
        let cells: String = cells.iter().map(|cell| format!("<td>{cell}</td>")).collect();
        format!("<tr>{cells}</tr>")
    }
}

/// Escape text for use in HTML content and quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn genres(names: &[&str]) -> GenrePreview {
        let names: Vec<String> = names.iter().map(|g| g.to_string()).collect();
        GenrePreview::new(&names)
    }

    #[test]
    fn test_text_stars() {
        let text = TextRenderer;
        assert_eq!(text.render_stars(&StarRating::from_rating(Some(4.0))), "★★★★☆ 4.0");
        assert_eq!(text.render_stars(&StarRating::from_rating(Some(3.6))), "★★★⯪☆ 3.6");
        assert_eq!(text.render_stars(&StarRating::from_rating(Some(4.9))), "★★★★⭑ 4.9");
        assert_eq!(text.render_stars(&StarRating::from_rating(None)), "N/A");
    }

    #[test]
    fn test_text_genres() {
        let text = TextRenderer;
        let mut long = genres(&["Fiction", "Drama", "War", "History"]);
        assert_eq!(text.render_genres(&long), "Fiction, Drama (+2 more)");
        long.expand();
        assert_eq!(text.render_genres(&long), "Fiction, Drama, War, History");
        assert_eq!(text.render_genres(&genres(&["Fiction", "Drama"])), "Fiction, Drama");
    }

    #[test]
    fn test_html_stars() {
        let html = HtmlRenderer;

        let whole = html.render_stars(&StarRating::from_rating(Some(4.0)));
        assert_eq!(whole.matches("color: gold").count(), 4);
        assert_eq!(whole.matches("color: #ddd").count(), 1);
        assert!(whole.ends_with("<span class='rating-value'>4.0</span></div>"));
        assert!(!whole.contains("<svg"));

        let half = html.render_stars(&StarRating::from_rating(Some(3.6)));
        assert!(half.contains("id=\"half-grad\""));
        assert!(half.contains("offset=\"50%\""));

        let partial = html.render_stars(&StarRating::from_rating(Some(4.9)));
        assert!(partial.contains("id=\"partial-grad-90\""));
        assert!(partial.contains("offset=\"90%\""));
        assert_eq!(partial.matches("color: #ddd").count(), 0);

        let missing = html.render_stars(&StarRating::from_rating(None));
        assert_eq!(missing, "<span class='rating-value'>N/A</span>");
    }

    #[test]
    fn test_html_genres_use_details_until_expanded() {
        let html = HtmlRenderer;
        let mut long = genres(&["Fiction", "Drama", "War", "History"]);

        let collapsed = html.render_genres(&long);
        assert!(collapsed.starts_with("<div class='book-content'>Fiction, Drama, <details"));
        assert!(collapsed.contains("<summary>more</summary><div>Fiction, Drama, War, History</div>"));

        long.expand();
        assert_eq!(
            html.render_genres(&long),
            "<div class='book-content'>Fiction, Drama, War, History</div>"
        );
        assert_eq!(html.render_genres(&genres(&[])), "");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("Tom & Jerry <\"Cat\" 'n' Mouse>"),
            "Tom &amp; Jerry &lt;&quot;Cat&quot; &#39;n&#39; Mouse&gt;"
        );
    }
}
