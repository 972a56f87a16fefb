use scraper::{ElementRef, Html, Selector};

use crate::catalog::EpisodeRecord;
use crate::config::{EPISODE_TITLE_SELECTOR, SCRIPT_CONTAINER_SELECTOR};
use crate::{Error, Result};

/// Finds the script body on an episode page and returns its inner markup, `<br>`s included.
/// The container's own `<div ...>` and `</div>` tags are not part of the result.
pub fn script_container(html: &str) -> Result<String> {
    let doc = Html::parse_document(html);
    let container_selector = create_selector(SCRIPT_CONTAINER_SELECTOR)?;

    doc.select(&container_selector)
        .next()
        .map(|div| div.inner_html())
        .ok_or_else(|| Error::MissingMarker {
            marker: SCRIPT_CONTAINER_SELECTOR.into(),
        })
}

/// Collects every episode-title anchor on a season listing page, in document order.
/// A page without any anchors yields an empty `Vec`.
pub fn episode_links(html: &str) -> Result<Vec<EpisodeRecord>> {
    let doc = Html::parse_document(html);
    let title_selector = create_selector(EPISODE_TITLE_SELECTOR)?;

    doc.select(&title_selector).map(episode_record).collect()
}

fn episode_record(anchor: ElementRef) -> Result<EpisodeRecord> {
    let identifier = anchor
        .attr("href")
        .ok_or_else(|| Error::ParseIdentifier(anchor.html()))?;
    let (season, episode) = season_episode(identifier)?;
    let title = anchor.text().collect::<String>();

    Ok(EpisodeRecord {
        identifier: identifier.to_owned(),
        season,
        episode,
        title: title.trim().to_owned(),
    })
}

/// Reads the season and episode out of the last five characters of an identifier.
///
/// `...&episode=s01e05` ends in `01e05`: season is `[len-5, len-3)`, episode is the last two.
/// The character in between is not looked at.
pub fn season_episode(identifier: &str) -> Result<(u32, u32)> {
    let err = || Error::ParseIdentifier(identifier.to_owned());
    let len = identifier.len();
    if len < 5 {
        return Err(err());
    }

    let season = identifier
        .get(len - 5..len - 3)
        .and_then(parse_field)
        .ok_or_else(err)?;
    let episode = identifier
        .get(len - 2..)
        .and_then(parse_field)
        .ok_or_else(err)?;
    Ok((season, episode))
}

fn parse_field(field: &str) -> Option<u32> {
    // `str::parse` would also take a leading `+`.
    if !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok().filter(|&n| n > 0)
}

#[inline]
fn create_selector(sel_str: &str) -> Result<Selector> {
    Selector::parse(sel_str).map_err(|_| Error::ParseMissingSelector(sel_str.into()))
}
