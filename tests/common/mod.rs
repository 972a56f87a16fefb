// Shared by several test crates, each of which uses only part of it.
#![allow(dead_code)]

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const SHOW: &str = "the-good-place";
pub const SEASON_ONE: &str = "episode_scripts.php?tv-show=the-good-place&season=1";
pub const SEASON_TWO: &str = "episode_scripts.php?tv-show=the-good-place&season=2";

/// Answers a GET for `page` (a path relative to the url base, query included) with `body`.
/// Requests nothing is mounted for get wiremock's 404.
pub async fn mount_page(server: &MockServer, page: &str, status: u16, body: &str) {
    let (page_path, query) = page.split_once('?').unwrap_or((page, ""));
    let mut mock = Mock::given(method("GET")).and(path(format!("/{page_path}")));
    for (key, value) in query.split('&').filter_map(|pair| pair.split_once('=')) {
        mock = mock.and(query_param(key, value));
    }
    mock.respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

/// The server's address with a trailing slash, ready to have a page path appended.
pub fn url_base(server: &MockServer) -> String {
    format!("{}/", server.uri())
}

/// Two seasons, four listed episodes. Only 1x01 and 1x02 have a script:
/// 1x03's page has no script container and 2x01 isn't served at all.
pub async fn good_place() -> MockServer {
    let server = MockServer::start().await;

    mount_page(
        &server,
        SEASON_ONE,
        200,
        &season_page(
            SHOW,
            &[(1, 2, "Flying"), (1, 1, "Everything Is Fine"), (1, 3, "Tahani Al-Jamil")],
        ),
    )
    .await;
    mount_page(
        &server,
        SEASON_TWO,
        200,
        &season_page(SHOW, &[(2, 1, "Everything Is Great!")]),
    )
    .await;
    mount_page(
        &server,
        &episode_path(SHOW, 1, 1),
        200,
        &script_page(&[
            "Welcome!  Everything is fine.",
            "There are 322 people in the Good Place.",
            "Your soulmate is Chidi.",
        ]),
    )
    .await;
    mount_page(
        &server,
        &episode_path(SHOW, 1, 2),
        200,
        &script_page(&["Let's go flying.", "", "I'm scared of heights."]),
    )
    .await;
    mount_page(
        &server,
        &episode_path(SHOW, 1, 3),
        200,
        "<html><body><p>Script coming soon</p></body></html>",
    )
    .await;

    server
}

pub fn episode_path(show: &str, season: u32, episode: u32) -> String {
    format!("view_episode_scripts.php?tv-show={show}&episode=s{season:02}e{episode:02}")
}

pub fn season_page(show: &str, episodes: &[(u32, u32, &str)]) -> String {
    let links: String = episodes
        .iter()
        .map(|&(season, episode, title)| {
            format!(
                "<a class=\"season-episode-title\" href=\"{}\">{title}</a>\n",
                episode_path(show, season, episode).replace('&', "&amp;")
            )
        })
        .collect();
    format!("<html><body><h1>{show}</h1><div class=\"season-episodes\">\n{links}</div></body></html>")
}

pub fn script_page(lines: &[&str]) -> String {
    format!(
        "<html><body><div class=\"script-header\">Episode</div>\
         <div class=\"scrolling-script-container\">\r\n  {}</div></body></html>",
        lines.join("<br>\r\n  ")
    )
}
