use crate::search::Topics;

pub const URL_BASE: &str = "https://www.springfieldspringfield.co.uk/";
pub const SEASON_PATH: &str = "episode_scripts.php?tv-show=the-good-place";

/// Anchors on a season page that link to an episode's script.
pub const EPISODE_TITLE_SELECTOR: &str = "a.season-episode-title";
/// The div on an episode page that wraps the script text.
pub const SCRIPT_CONTAINER_SELECTOR: &str = "div.scrolling-script-container";
pub const LINE_BREAK_MARKER: &str = "<br>";

/// Everything one run needs to know. Built by the CLI.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub url_base: String,
    pub season_paths: Vec<String>,
    pub topics: Topics,
    pub numerals: bool,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            url_base: URL_BASE.to_owned(),
            season_paths: vec![SEASON_PATH.to_owned()],
            topics: Topics::default(),
            numerals: false,
        }
    }
}
