use std::path::PathBuf;

use log::{info, warn};

use crate::config::Config;
use crate::download::download_image;
use crate::error::Result;
use crate::io::{ensure_dir, image_path, metadata_path};
use crate::metadata::save_metadata;
use crate::scraper::{fetch_html, parse_apod_page, ApodRecord, Extraction};

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Saved {
        record: ApodRecord,
        image_path: PathBuf,
        /// `None` when writing the metadata file failed.
        metadata_path: Option<PathBuf>,
    },
    VideoDay {
        url: String,
    },
}

/// Fetches the page, then saves the featured image and its metadata into
/// `config.save_dir`. Nothing is written for a video day or when the page has
/// no image.
pub fn run(config: &Config) -> Result<Outcome> {
    println!("Fetching latest APOD...");

    // Fetch and parse the APOD page
    let html = fetch_html(&config.page_url, config.page_timeout)?;
    let record = match parse_apod_page(&html, &config.page_url)? {
        Extraction::Video { url } => return Ok(Outcome::VideoDay { url }),
        Extraction::Image(record) => record,
    };

    println!("Title: {}", record.title);
    println!("Date: {}", record.date);

    // Output files are named after the page date
    ensure_dir(&config.save_dir)?;
    let image_path = image_path(&config.save_dir, &record.date, &record.image_url);
    let metadata_path = metadata_path(&config.save_dir, &record.date);

    println!("Downloading image...");
    let bytes = download_image(&record.image_url, &image_path, config.image_timeout)?;
    info!("Downloaded {} bytes", bytes);
    println!("Image saved to: {}", image_path.display());

    // Metadata failure only warns
    let metadata_path = match save_metadata(&record, &metadata_path) {
        Ok(()) => {
            println!("Metadata saved to: {}", metadata_path.display());
            Some(metadata_path)
        }
        Err(e) => {
            warn!("{}", e);
            println!("Error saving metadata: {}", e);
            println!("Warning: Failed to save metadata.");
            None
        }
    };

    Ok(Outcome::Saved {
        record,
        image_path,
        metadata_path,
    })
}
