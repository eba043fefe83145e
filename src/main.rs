//! note-excerpt - Demo entry point
//!
//! Reads a note from a file and prints the excerpt that the search results
//! list would display for the given keywords, followed by the note's
//! information rows.
//!
//! Usage: `note-excerpt <note-file> [keyword ...]`

use anyhow::{bail, Context, Result};
use note_excerpt::info::{information_sections, InformationRow};
use note_excerpt::{Config, ExcerptMaker, Note};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging (stderr only, excerpt output goes to stdout)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;
    info!(
        "Configuration loaded: trailing_context={}, preview_max_chars={}",
        config.trailing_context, config.preview_max_chars
    );

    let mut args = std::env::args().skip(1);
    let path = match args.next() {
        Some(path) => path,
        None => bail!("Usage: note-excerpt <note-file> [keyword ...]"),
    };
    let keywords: Vec<String> = args.collect();

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read note file: {}", path))?;
    let note = Note::new(path.clone(), content);

    let mut maker = ExcerptMaker::with_trailing_context(config.trailing_context);
    if !keywords.is_empty() {
        maker.update_keywords(Some(&keywords));
    }

    match maker.excerpt(&note) {
        Some(excerpt) => println!("excerpt: {}", excerpt),
        None => println!("excerpt: (nothing to excerpt)"),
    }

    for section in information_sections(&note) {
        for row in section.rows {
            match row {
                InformationRow::Header { title } => println!("-- {}", title),
                InformationRow::Metric { title, value } => println!("{}: {}", title, value),
                InformationRow::Reference { url, title, date } => {
                    println!("{}: {} ({})", title, url, date)
                }
            }
        }
    }

    Ok(())
}
