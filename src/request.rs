use reqwest::Client;

use crate::{info_time, parse, Error, Result};

/// Requests `url_base + path` and returns the body as text.
/// Anything other than a 2xx status is an error, nothing is retried.
pub async fn fetch_page(client: &Client, url_base: &str, path: &str) -> Result<String> {
    let url = format!("{url_base}{path}");
    info_time!("Requesting {}", url);

    let res = client.get(&url).send().await?;
    let status = res.status();
    if !status.is_success() {
        return Err(Error::HttpStatus {
            url,
            status: status.as_u16(),
        });
    }
    let html = res.text().await?;
    Ok(html)
}

/// Returns the markup of a season listing page.
pub async fn fetch_season_page(client: &Client, url_base: &str, season_path: &str) -> Result<String> {
    fetch_page(client, url_base, season_path).await
}

/// Returns the inner markup of the script container on an episode page.
/// Fails with `Error::MissingMarker` when the page has no script on it.
pub async fn fetch_script_page(client: &Client, url_base: &str, script_path: &str) -> Result<String> {
    let html = fetch_page(client, url_base, script_path).await?;
    parse::script_container(&html)
}
