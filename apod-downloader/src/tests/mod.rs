use url::Url;

pub mod fixtures;

pub const PAGE_URL: &str = "https://apod.nasa.gov/apod/astropix.html";

pub fn page_url() -> Url {
    Url::parse(PAGE_URL).unwrap()
}
