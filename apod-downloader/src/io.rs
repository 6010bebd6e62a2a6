use std::fs;
use std::path::{Path, PathBuf};

use url::Url;

use crate::error::{Error, Result};

pub const DEFAULT_IMAGE_EXTENSION: &str = "jpg";

pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    fs::create_dir_all(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Extension of the last path segment of `url`, without the dot.
pub fn image_extension(url: &Url) -> String {
    Path::new(url.path())
        .extension()
        .map(|ext| ext.to_string_lossy().to_string())
        .filter(|ext| !ext.is_empty())
        .unwrap_or_else(|| DEFAULT_IMAGE_EXTENSION.to_string())
}

pub fn image_path(save_dir: &Path, date: &str, image_url: &Url) -> PathBuf {
    save_dir.join(format!("APOD_{}.{}", date, image_extension(image_url)))
}

pub fn metadata_path(save_dir: &Path, date: &str) -> PathBuf {
    save_dir.join(format!("APOD_{}.txt", date))
}
