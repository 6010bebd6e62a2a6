use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;
use url::Url;

use crate::error::{Error, Result};

pub const CHUNK_SIZE: usize = 8 * 1024;

/// Streams `url` into `save_path` one chunk at a time, returning the number of
/// bytes written. A partially written file is left in place on failure.
pub fn download_image(url: &Url, save_path: &Path, timeout: Duration) -> Result<u64> {
    let download_error = |error: reqwest::Error| Error::Download {
        url: url.to_string(),
        error: error.into(),
    };

    let client = Client::builder()
        .timeout(timeout)
        .build()
        .map_err(download_error)?;
    let mut response = client
        .get(url.clone())
        .send()
        .and_then(|response| response.error_for_status())
        .map_err(download_error)?;

    let mut file = File::create(save_path).map_err(|source| Error::Io {
        path: save_path.to_path_buf(),
        source,
    })?;
    let written = write_chunks(&mut response, &mut file, url, save_path)?;

    debug!("Wrote {} bytes from {} to {}", written, url, save_path.display());
    Ok(written)
}

/// Copies `body` into `file` in `CHUNK_SIZE` pieces. Read failures are
/// transfer errors for `url`, write failures are I/O errors on `save_path`.
pub fn write_chunks<R: Read, W: Write>(
    body: &mut R,
    file: &mut W,
    url: &Url,
    save_path: &Path,
) -> Result<u64> {
    let mut buffer = [0u8; CHUNK_SIZE];
    let mut written = 0u64;
    loop {
        let n = body.read(&mut buffer).map_err(|error| Error::Download {
            url: url.to_string(),
            error: error.into(),
        })?;
        if n == 0 {
            break;
        }
        file.write_all(&buffer[..n]).map_err(|source| Error::Io {
            path: save_path.to_path_buf(),
            source,
        })?;
        written += n as u64;
    }
    Ok(written)
}
