use std::path::PathBuf;
use std::time::Duration;

use directories::BaseDirs;
use url::Url;

pub const APOD_URL: &str = "https://apod.nasa.gov/apod/astropix.html";
pub const PAGE_TIMEOUT: Duration = Duration::from_secs(10);
pub const IMAGE_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct Config {
    /// Page that is scraped; relative image references resolve against it.
    pub page_url: Url,
    pub save_dir: PathBuf,
    pub page_timeout: Duration,
    pub image_timeout: Duration,
}

impl Config {
    pub fn new(page_url: Url, save_dir: PathBuf) -> Config {
        Config {
            page_url,
            save_dir,
            page_timeout: PAGE_TIMEOUT,
            image_timeout: IMAGE_TIMEOUT,
        }
    }
}

/// `~/Desktop/APOD`, or `None` when the home directory cannot be determined.
pub fn default_save_dir() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join("Desktop").join("APOD"))
}
