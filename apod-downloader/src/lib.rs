pub mod config;
pub mod download;
pub mod error;
pub mod io;
pub mod metadata;
pub mod pipeline;
pub mod scraper;

#[cfg(test)]
pub mod tests;

pub use crate::config::{default_save_dir, Config, APOD_URL};
pub use crate::error::{Error, Result};
pub use crate::pipeline::{run, Outcome};
pub use crate::scraper::{fetch_html, parse_apod_page, ApodRecord, Extraction};
