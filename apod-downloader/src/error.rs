use std::path::PathBuf;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

// reqwest renders its whole cause chain in Display, so the HTTP errors are
// embedded in the message rather than exposed as `source`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Error fetching APOD page {url}: {error}")]
    Fetch { url: String, error: reqwest::Error },

    #[error("Error downloading image {url}: {error}")]
    Download { url: String, error: BoxError },

    #[error("Could not find image URL on the page")]
    NoImageUrl,

    #[error("Invalid URL {url}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("I/O error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
