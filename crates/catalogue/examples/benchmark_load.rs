use catalogue::Catalogue;
use std::path::Path;
use std::time::Instant;

fn main() {
    let path = Path::new("data/goodreads_data_updated.csv");

    println!("Loading book catalogue...\n");

    let start = Instant::now();
    let catalogue = Catalogue::load_from_file(path)
        .expect("Failed to load dataset");
    let elapsed = start.elapsed();

    let (books, genres, authors) = catalogue.counts();

    println!("\n=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Books: {}", books);
    println!("Genres: {}", genres);
    println!("Authors: {}", authors);
    println!("\nPerformance: {:.0} books/second",
             books as f64 / elapsed.as_secs_f64());
}
