//! Scrapes episode scripts off a script-hosting site, splits them into numbered
//! dialogue lines and finds the lines that mention a topic.
//!
//! The pipeline is strictly sequential: one catalog fetch per season page,
//! then one script fetch per episode in listing order.

mod error;
mod macros;

pub mod catalog;
pub mod clean;
pub mod config;
pub mod normalize;
pub mod parse;
pub mod process;
pub mod request;
pub mod search;

pub use error::{Error, Result};
