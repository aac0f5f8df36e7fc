//! Command parsing for the interactive `browse` loop.

use anyhow::{anyhow, bail, Context, Result};
use pipeline::{SortField, SortOrder};

/// One line of user input in the browse loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    More,
    MinRating(u8),
    SelectGenre(String),
    DeselectGenre(String),
    SelectAuthor(String),
    DeselectAuthor(String),
    Sort(SortField),
    Order(SortOrder),
    /// Expand the genre list of a visible row (1-based)
    Expand(usize),
    /// Drop every filter; sort and cursor stay as they are
    Clear,
    ListGenres,
    ListAuthors,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  more                 load 100 more rows
  rating <0-5>         set the minimum rating
  genre +<name>        add a genre to the selection (-<name> removes it)
  author +<name>       add an author to the selection (-<name> removes it)
  sort <field>         No Of Rating | Rating | Author Name | Book Title | No Of Pages
  order <asc|desc>     sort direction
  expand <row>         show every genre of a row
  clear                remove all filters
  genres / authors     list the available options
  help                 show this message
  quit                 leave";

impl Command {
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_lowercase().as_str() {
            "more" | "m" => Command::More,
            "rating" => Command::MinRating(
                rest.parse()
                    .with_context(|| format!("Invalid rating: {rest:?}"))?,
            ),
            "genre" => match parse_toggle(rest)? {
                (true, name) => Command::SelectGenre(name),
                (false, name) => Command::DeselectGenre(name),
            },
            "author" => match parse_toggle(rest)? {
                (true, name) => Command::SelectAuthor(name),
                (false, name) => Command::DeselectAuthor(name),
            },
            "sort" => Command::Sort(rest.parse()?),
            "order" => Command::Order(rest.parse()?),
            "expand" => {
                let row: usize = rest
                    .parse()
                    .with_context(|| format!("Invalid row number: {rest:?}"))?;
                if row == 0 {
                    bail!("Rows are numbered from 1");
                }
                Command::Expand(row)
            }
            "clear" => Command::Clear,
            "genres" => Command::ListGenres,
            "authors" => Command::ListAuthors,
            "help" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            "" => bail!("Empty command (type 'help')"),
            other => return Err(anyhow!("Unknown command: {other} (type 'help')")),
        };
        Ok(command)
    }
}

/// "+Name" selects, "-Name" deselects, a bare name selects
fn parse_toggle(rest: &str) -> Result<(bool, String)> {
    let (select, name) = if let Some(name) = rest.strip_prefix('+') {
        (true, name)
    } else if let Some(name) = rest.strip_prefix('-') {
        (false, name)
    } else {
        (true, rest)
    };
    let name = name.trim();
    if name.is_empty() {
        bail!("Expected a name after the command");
    }
    Ok((select, name.to_string()))
}
