use std::collections::BTreeMap;
use std::fmt;

use chrono::Local;
use reqwest::Client;

use crate::request::fetch_season_page;
use crate::{info_time, parse, warn_time, Result};

/// `(season, episode)`. Orders by season first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EpisodeKey {
    pub season: u32,
    pub episode: u32,
}

impl EpisodeKey {
    pub fn new(season: u32, episode: u32) -> Self {
        Self { season, episode }
    }
}

impl fmt::Display for EpisodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.season, self.episode)
    }
}

/// One entry of a season listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeRecord {
    /// The `href` of the episode link, relative to the url base.
    pub identifier: String,
    pub season: u32,
    pub episode: u32,
    pub title: String,
}

impl EpisodeRecord {
    pub fn key(&self) -> EpisodeKey {
        EpisodeKey::new(self.season, self.episode)
    }
}

pub type Titles = BTreeMap<EpisodeKey, String>;

/// Scrapes one season listing page for the episodes it links to.
/// The records come back in the order the links appear on the page.
pub async fn get_season_urls(
    client: &Client,
    url_base: &str,
    season_path: &str,
) -> Result<Vec<EpisodeRecord>> {
    let start_time = Local::now();
    let html = fetch_season_page(client, url_base, season_path).await?;
    let records = parse::episode_links(&html)?;

    if records.is_empty() {
        warn_time!("No episode links found on {}{}", url_base, season_path);
    }
    info_time!(
        start_time,
        "Found {} episodes on {}{}",
        records.len(),
        url_base,
        season_path
    );
    Ok(records)
}

/// Runs `get_season_urls` for every season path and chains the results.
/// Any failure aborts the whole catalog.
pub async fn get_catalog<S: AsRef<str>>(
    client: &Client,
    url_base: &str,
    season_paths: &[S],
) -> Result<Vec<EpisodeRecord>> {
    let mut catalog = Vec::new();
    for season_path in season_paths {
        let records = get_season_urls(client, url_base, season_path.as_ref()).await?;
        catalog.extend(records);
    }
    Ok(catalog)
}

pub fn titles(catalog: &[EpisodeRecord]) -> Titles {
    catalog
        .iter()
        .map(|record| (record.key(), record.title.clone()))
        .collect()
}
