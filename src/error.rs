use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The selector you are trying to scrape for is missing. Selector: {0}")]
    ParseMissingSelector(String),
    #[error("Page is missing the expected markup: {marker}")]
    MissingMarker { marker: String },
    #[error("Couldn't read season/episode numbers from identifier: {0:?}")]
    ParseIdentifier(String),

    #[error("Request to {url} failed with status {status}")]
    HttpStatus { url: String, status: u16 },
    #[error("Reqwest Error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Io Error: {0}")]
    Io(#[from] std::io::Error),
}
