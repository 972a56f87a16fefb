use chrono::Local;
use reqwest::Client;

use crate::catalog::{get_catalog, titles, EpisodeRecord, Titles};
use crate::clean::clean;
use crate::config::ScrapeConfig;
use crate::request::fetch_script_page;
use crate::search::{find_lines, ScriptCollection, TopicResult};
use crate::{info_time, warn_time, Result};

#[derive(Debug)]
pub struct Report {
    pub titles: Titles,
    pub scripts: ScriptCollection,
    pub lines: TopicResult,
}

pub async fn process_site(config: &ScrapeConfig) -> Result<Report> {
    let start_time = Local::now();
    let client = Client::new();

    info_time!("Started scraping {}", config.url_base);
    if config.topics.is_empty() && !config.numerals {
        warn_time!("No topics and no --numerals, nothing will match");
    }

    let catalog = get_catalog(&client, &config.url_base, &config.season_paths).await?;
    info_time!(start_time, "Finished the catalog: {} episodes.", catalog.len());

    let scripts = collect_scripts(&client, &config.url_base, &catalog).await;
    let lines = find_lines(&config.topics, &scripts, config.numerals);

    let topical = lines.values().map(Vec::len).sum::<usize>();
    info_time!(
        start_time,
        "DONE: {} scripts, {} topical lines",
        scripts.len(),
        topical
    );

    Ok(Report {
        titles: titles(&catalog),
        scripts,
        lines,
    })
}

/// Fetches and cleans the script of every episode, one at a time, in catalog order.
/// An episode that fails to fetch or has no script on its page is logged and left out.
pub async fn collect_scripts(
    client: &Client,
    url_base: &str,
    catalog: &[EpisodeRecord],
) -> ScriptCollection {
    let mut scripts = ScriptCollection::new();

    for record in catalog {
        let start_time = Local::now();
        let raw_script = match fetch_script_page(client, url_base, &record.identifier).await {
            Ok(raw_script) => raw_script,
            Err(e) => {
                warn_time!("Skipping {} {:?}: {}", record.key(), record.title, e);
                continue;
            }
        };

        let script = clean(&raw_script);
        info_time!(
            start_time,
            "Processed {} {:?}: {} lines",
            record.key(),
            record.title,
            script.len()
        );
        scripts.insert(record.key(), script);
    }

    scripts
}
