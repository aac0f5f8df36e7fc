mod repl;

use anyhow::{bail, Result};
use browser::{BrowseRequest, BrowseSession, BrowseView, CatalogueBrowser};
use catalogue::CatalogueCache;
use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use pipeline::{FilterCriteria, SortCriteria, SortField, SortOrder};
use presenter::{BookRow, HtmlRenderer, RowRenderer, StarRating, TextRenderer};
use rayon::prelude::*;
use repl::Command;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::info;

/// Book Catalogue - filter, sort and page through a book dataset
#[derive(Parser)]
#[command(name = "book-catalogue")]
#[command(about = "Browse a book catalogue by rating, genre and author", long_about = None)]
struct Cli {
    /// Path to the book dataset CSV
    #[arg(
        short,
        long,
        env = "BOOK_CATALOGUE_DATA",
        default_value = "data/goodreads_data_updated.csv"
    )]
    data: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List matching books once
    List {
        #[command(flatten)]
        selection: Selection,

        /// Press "load more" this many times before listing
        #[arg(long, default_value = "0")]
        load_more: usize,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List every genre in the catalogue
    Genres,

    /// List every author in the catalogue
    Authors,

    /// Browse interactively, loading more rows on demand
    Browse {
        #[command(flatten)]
        selection: Selection,
    },

    /// Run many independent sessions in parallel and report latencies
    Benchmark {
        /// Number of interactions to run
        #[arg(long, default_value = "100")]
        requests: usize,
    },
}

/// Filter and sort selections shared by `list` and `browse`
#[derive(Args)]
struct Selection {
    /// Minimum rating (0-5)
    #[arg(long, default_value = "0", value_parser = clap::value_parser!(u8).range(0..=5))]
    min_rating: u8,

    /// Genre to include (repeatable; a book matches if it has any of them)
    #[arg(long = "genre")]
    genres: Vec<String>,

    /// Author to include (repeatable)
    #[arg(long = "author")]
    authors: Vec<String>,

    /// Sort column: "No Of Rating", "Rating", "Author Name", "Book Title", "No Of Pages"
    #[arg(long, default_value = "No Of Rating")]
    sort_by: SortField,

    /// Sort order: ascending or descending
    #[arg(long, default_value = "descending")]
    order: SortOrder,
}

impl Selection {
    fn to_request(&self) -> Result<BrowseRequest> {
        let criteria =
            FilterCriteria::new(self.min_rating, self.genres.clone(), self.authors.clone())?;
        Ok(BrowseRequest::new(
            criteria,
            SortCriteria::new(self.sort_by, self.order),
        ))
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Html,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let cache = CatalogueCache::new();
    let browser = CatalogueBrowser::open(&cache, &cli.data)?;

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::List {
            selection,
            load_more,
            format,
        } => handle_list(&browser, &selection, load_more, format)?,
        Commands::Genres => print_options("Genres", browser.genre_options()),
        Commands::Authors => print_options("Authors", browser.author_options()),
        Commands::Browse { selection } => handle_browse(&browser, &selection)?,
        Commands::Benchmark { requests } => handle_benchmark(&browser, requests)?,
    }

    Ok(())
}

/// Handle the 'list' command
fn handle_list(
    browser: &CatalogueBrowser,
    selection: &Selection,
    load_more: usize,
    format: OutputFormat,
) -> Result<()> {
    let request = selection.to_request()?;

    let (mut session, mut view) = browser.browse(BrowseSession::new(), &request);
    for _ in 0..load_more {
        (session, view) = browser.browse(session, &request.load_more());
    }

    match format {
        OutputFormat::Text => print_view(&view),
        OutputFormat::Json => {
            let json = serde_json::json!({
                "total_matches": view.total_matches,
                "revealed": view.revealed,
                "has_more": view.has_more,
                "rows": view.rows,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Html => {
            println!("<table>\n{}\n</table>", HtmlRenderer.render_rows(&view.rows));
        }
    }
    Ok(())
}

/// Handle the 'browse' command
fn handle_browse(browser: &CatalogueBrowser, selection: &Selection) -> Result<()> {
    let mut request = selection.to_request()?;
    let (mut session, mut view) = browser.browse(BrowseSession::new(), &request);
    print_view(&view);
    println!("{}", "Type 'help' for commands.".dimmed());

    let stdin = io::stdin();
    loop {
        print!("{} ", ">".green().bold());
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(err) => {
                eprintln!("{} {err:#}", "error:".red().bold());
                continue;
            }
        };

        let current = match command {
            Command::Quit => break,
            Command::Help => {
                println!("{}", repl::HELP);
                continue;
            }
            Command::ListGenres => {
                print_options("Genres", browser.genre_options());
                continue;
            }
            Command::ListAuthors => {
                print_options("Authors", browser.author_options());
                continue;
            }
            Command::Expand(number) => {
                match view.rows.get_mut(number - 1) {
                    Some(row) => {
                        row.genres.expand();
                        print_row(number, row);
                    }
                    None => eprintln!("{} no row {number}", "error:".red().bold()),
                }
                continue;
            }
            Command::More => request.load_more(),
            Command::MinRating(rating) => {
                if let Err(err) = request.criteria.set_min_rating(rating) {
                    eprintln!("{} {err}", "error:".red().bold());
                    continue;
                }
                request.clone()
            }
            Command::SelectGenre(genre) => {
                request.criteria.select_genre(genre);
                request.clone()
            }
            Command::DeselectGenre(genre) => {
                request.criteria.deselect_genre(&genre);
                request.clone()
            }
            Command::SelectAuthor(author) => {
                request.criteria.select_author(author);
                request.clone()
            }
            Command::DeselectAuthor(author) => {
                request.criteria.deselect_author(&author);
                request.clone()
            }
            Command::Sort(field) => {
                request.sort.field = field;
                request.clone()
            }
            Command::Order(order) => {
                request.sort.order = order;
                request.clone()
            }
            Command::Clear => {
                request.criteria = FilterCriteria::default();
                request.clone()
            }
        };

        (session, view) = browser.browse(session, &current);
        print_view(&view);
    }

    Ok(())
}

/// Handle the 'benchmark' command
fn handle_benchmark(browser: &CatalogueBrowser, requests: usize) -> Result<()> {
    if requests == 0 {
        bail!("Benchmark needs at least one request");
    }

    // Vary the selections deterministically across requests
    let genres = browser.genre_options();
    let workload: Vec<BrowseRequest> = (0..requests)
        .map(|i| -> Result<BrowseRequest> {
            let mut criteria = FilterCriteria::default();
            criteria.set_min_rating((i % 5) as u8)?;
            if !genres.is_empty() && i % 2 == 0 {
                criteria.select_genre(genres[i % genres.len()].clone());
            }
            let field = SortField::ALL[i % SortField::ALL.len()];
            let order = if i % 3 == 0 {
                SortOrder::Ascending
            } else {
                SortOrder::Descending
            };
            Ok(BrowseRequest::new(criteria, SortCriteria::new(field, order)))
        })
        .collect::<Result<_>>()?;

    // Every request is its own session against the shared catalogue
    info!(requests, "Running benchmark");
    let start = Instant::now();
    let mut timings: Vec<Duration> = workload
        .par_iter()
        .map(|request| {
            let started = Instant::now();
            let (_, view) = browser.browse(BrowseSession::new(), request);
            let elapsed = started.elapsed();
            std::hint::black_box(view);
            elapsed
        })
        .collect();
    let wall_time = start.elapsed();

    let total_time: Duration = timings.iter().sum();
    let avg_latency = total_time / (timings.len() as u32);
    timings.sort();
    let p50 = timings[timings.len() / 2];
    let p95 = timings[((timings.len() as f32 * 0.95) as usize).min(timings.len() - 1)];
    let p99 = timings[((timings.len() as f32 * 0.99) as usize).min(timings.len() - 1)];
    let throughput = requests as f32 / wall_time.as_secs_f32();

    println!("{}", "Benchmark results:".bold().blue());
    println!("Wall time: {:?}", wall_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", p50);
    println!("P95 latency: {:?}", p95);
    println!("P99 latency: {:?}", p99);
    println!("Throughput: {:.2} requests/second", throughput);

    Ok(())
}

/// Print every visible row followed by the "more" prompt or end marker
fn print_view(view: &BrowseView) {
    println!(
        "{}",
        format!(
            "Showing {} of {} matching books",
            view.rows.len(),
            view.total_matches
        )
        .bold()
        .blue()
    );
    for (index, row) in view.rows.iter().enumerate() {
        print_row(index + 1, row);
    }

    if view.has_more {
        println!(
            "{}",
            format!(
                "{} more available - type 'more' or pass --load-more",
                view.total_matches - view.rows.len()
            )
            .cyan()
        );
    } else {
        println!("{}", "You've reached the end!".green());
    }
}

fn print_row(number: usize, row: &BookRow) {
    let text = TextRenderer;
    let stars = match row.stars {
        StarRating::NotAvailable => text.render_stars(&row.stars).dimmed(),
        StarRating::Rated { .. } => text.render_stars(&row.stars).yellow(),
    };
    println!(
        "{:>4}. {} by {} {} ({} ratings) [{}] {} pages",
        number.to_string().green(),
        row.title.bold(),
        row.author,
        stars,
        row.rating_count,
        text.render_genres(&row.genres),
        row.pages
    );
}

fn print_options(heading: &str, options: &[String]) {
    println!("{}", format!("{heading} ({}):", options.len()).bold().blue());
    for option in options {
        println!("  {} {}", "•".green(), option);
    }
}
