use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::scraper::ApodRecord;

/// Plain text rendering of a record, as written next to the image.
pub fn format_metadata(record: &ApodRecord) -> String {
    format!(
        "Date: {}\nTitle: {}\nImage URL: {}\n\nDescription:\n{}\n",
        record.date, record.title, record.image_url, record.description
    )
}

pub fn save_metadata(record: &ApodRecord, save_path: &Path) -> Result<()> {
    fs::write(save_path, format_metadata(record)).map_err(|source| Error::Io {
        path: save_path.to_path_buf(),
        source,
    })
}
