use std::sync::LazyLock;
use std::time::Duration;

use chrono::{Local, NaiveDate};
use log::debug;
use regex::Regex;
use reqwest::blocking::Client;
use scraper::{ElementRef, Html, Node, Selector};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Error, Result};

pub const UNKNOWN_TITLE: &str = "Unknown";

/// Hosts whose links mean the day's entry is a video rather than an image.
pub const VIDEO_HOSTS: &[&str] = &["youtube.com", "youtu.be", "youtube-nocookie.com", "vimeo.com"];

/// `<year> <month name> <day>`; only English month names, full or abbreviated.
static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(\d{4})\s+(january|february|march|april|may|june|july|august|september|october|november|december|jan|feb|mar|apr|jun|jul|aug|sep|oct|nov|dec)\s+(\d{1,2})\b",
    )
    .expect("DATE_PATTERN regex")
});
static EXPLANATION_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)explanation:").expect("EXPLANATION_LABEL regex"));

static CENTER: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("center").expect("center selector"));
static BOLD: LazyLock<Selector> = LazyLock::new(|| Selector::parse("b").expect("b selector"));
static IMG: LazyLock<Selector> = LazyLock::new(|| Selector::parse("img").expect("img selector"));

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ApodRecord {
    pub date: String,
    pub title: String,
    pub description: String,
    pub image_url: Url,
}

/// What a parsed page features.
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
    Image(ApodRecord),
    Video { url: String },
}

pub fn fetch_html(url: &Url, timeout: Duration) -> Result<String> {
    let fetch_error = |error: reqwest::Error| Error::Fetch {
        url: url.to_string(),
        error,
    };

    let client = Client::builder()
        .timeout(timeout)
        .build()
        .map_err(fetch_error)?;
    let response = client
        .get(url.clone())
        .send()
        .and_then(|response| response.error_for_status())
        .map_err(fetch_error)?;
    debug!("Fetched {} ({})", url, response.status());

    response.text().map_err(fetch_error)
}

pub fn parse_apod_page(html: &str, page_url: &Url) -> Result<Extraction> {
    let document = Html::parse_document(html);

    // Extract date, falling back to today
    let date = extract_date(&document).unwrap_or_else(|| {
        debug!("No date found on page, falling back to today");
        Local::now().date_naive().format("%Y-%m-%d").to_string()
    });
    // Extract title and explanation
    let title = extract_title(&document).unwrap_or_else(|| UNKNOWN_TITLE.to_string());
    let description = extract_description(&document);

    // Extract image URL; a linked video ends the run without a record
    let image_url = match extract_image_ref(&document) {
        Some(ImageRef::Linked(href)) => {
            let url = resolve(page_url, &href)?;
            if is_video_url(&url) {
                return Ok(Extraction::Video {
                    url: url.to_string(),
                });
            }
            url
        }
        Some(ImageRef::Source(src)) => resolve(page_url, &src)?,
        None => return Err(Error::NoImageUrl),
    };

    Ok(Extraction::Image(ApodRecord {
        date,
        title,
        description,
        image_url,
    }))
}

/// First `<year> <month name> <day>` inside a `<center>` block that is a real
/// calendar date, as `YYYY-MM-DD`.
pub fn extract_date(document: &Html) -> Option<String> {
    document.select(&CENTER).find_map(|center| {
        let text = center.text().collect::<String>();
        DATE_PATTERN.captures_iter(&text).find_map(|caps| {
            let candidate = format!("{} {} {}", &caps[1], &caps[2], &caps[3]);
            NaiveDate::parse_from_str(&candidate, "%Y %B %d")
                .ok()
                .map(|date| date.format("%Y-%m-%d").to_string())
        })
    })
}

pub fn extract_title(document: &Html) -> Option<String> {
    document
        .select(&CENTER)
        .find_map(|center| center.select(&BOLD).next())
        .map(|bold| normalize_whitespace(&bold.text().collect::<String>()))
        .filter(|title| !title.is_empty())
}

pub fn extract_description(document: &Html) -> String {
    let label = document
        .select(&BOLD)
        .find(|bold| EXPLANATION_LABEL.is_match(&bold.text().collect::<String>()));
    let label = match label {
        None => return String::new(),
        Some(label) => label,
    };

    // Collect text from everything after the label: bare text and inline elements
    let parts: Vec<String> = label
        .next_siblings()
        .filter_map(|node| {
            let text = match node.value() {
                Node::Text(text) => {
                    let text: &str = text;
                    text.to_string()
                }
                Node::Element(_) => ElementRef::wrap(node)?.text().collect::<String>(),
                _ => return None,
            };
            let text = normalize_whitespace(&text);
            (!text.is_empty()).then_some(text)
        })
        .collect();

    parts.join(" ")
}

#[derive(Debug, Clone, PartialEq)]
pub enum ImageRef {
    /// `href` of the link wrapping the image, usually the full resolution file.
    Linked(String),
    /// The image's own `src`.
    Source(String),
}

pub fn extract_image_ref(document: &Html) -> Option<ImageRef> {
    let img = document.select(&IMG).next()?;

    // Prefer the link around the image, it points at the full resolution file
    let href = img
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "a")
        .and_then(|a| a.value().attr("href"))
        .map(str::trim)
        .filter(|href| !href.is_empty());
    if let Some(href) = href {
        return Some(ImageRef::Linked(href.to_string()));
    }

    img.value()
        .attr("src")
        .map(str::trim)
        .filter(|src| !src.is_empty())
        .map(|src| ImageRef::Source(src.to_string()))
}

pub fn is_video_url(url: &Url) -> bool {
    let host = match url.host_str() {
        None => return false,
        Some(host) => host.to_lowercase(),
    };
    VIDEO_HOSTS
        .iter()
        .any(|video| host == *video || host.ends_with(&format!(".{}", video)))
}

fn resolve(base: &Url, reference: &str) -> Result<Url> {
    base.join(reference).map_err(|source| Error::InvalidUrl {
        url: reference.to_string(),
        source,
    })
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
