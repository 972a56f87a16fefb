use chrono::Local;
use clap::Parser;
use soulmate::config::{ScrapeConfig, SEASON_PATH, URL_BASE};
use soulmate::process::process_site;
use soulmate::search::print_lines;
use soulmate::{info_time, Result};

/// Scrape a show's episode scripts and print the lines that mention any of the topics.
#[derive(Parser)]
#[command(name = "soulmate", version)]
struct Cli {
    /// Substrings to look for (case-sensitive)
    topics: Vec<String>,

    /// Also print lines that contain a digit
    #[arg(short, long)]
    numerals: bool,

    #[arg(long, default_value = URL_BASE)]
    url_base: String,

    /// Season listing path, relative to the url base. Can be given more than once.
    #[arg(short, long = "season", default_value = SEASON_PATH)]
    seasons: Vec<String>,
}

impl From<Cli> for ScrapeConfig {
    fn from(cli: Cli) -> Self {
        Self {
            url_base: cli.url_base,
            season_paths: cli.seasons,
            topics: cli.topics.into_iter().collect(),
            numerals: cli.numerals,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let start_time = Local::now();
    let config = ScrapeConfig::from(Cli::parse());

    let report = process_site(&config).await?;
    print_lines(&report.titles, &report.lines)?;
    info_time!(start_time, "Full program time:");

    Ok(())
}
