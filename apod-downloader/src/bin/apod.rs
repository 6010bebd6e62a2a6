use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use apod_downloader::{default_save_dir, run, Config, Outcome, APOD_URL};
use clap::Parser;
use url::Url;

/// Download NASA's Astronomy Picture of the Day and its description
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// APOD page to scrape
    #[arg(long, default_value = APOD_URL)]
    url: Url,

    /// Directory to save the image and metadata into [default: ~/Desktop/APOD]
    #[arg(long)]
    save_dir: Option<PathBuf>,

    /// Also print the extracted record as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    ExitCode::from(exit_status(&download(&cli)))
}

/// 0 when the image was saved or the day is a video, 1 after reporting any error.
fn exit_status(result: &Result<()>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            println!("{:#}", e);
            1
        }
    }
}

fn download(cli: &Cli) -> Result<()> {
    let save_dir = match &cli.save_dir {
        Some(dir) => dir.clone(),
        None => default_save_dir().context("Could not determine the home directory")?,
    };
    let config = Config::new(cli.url.clone(), save_dir);

    match run(&config)? {
        Outcome::VideoDay { url } => {
            println!("Today's APOD is a video, not an image.");
            println!("Video URL: {}", url);
        }
        Outcome::Saved { record, .. } => {
            if cli.json {
                let json = serde_json::to_string_pretty(&record)
                    .context("Failed to serialize APOD record")?;
                println!("{}", json);
            }
            println!("\nDownload complete!");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn serve_page(server: &MockServer, html: &str) -> String {
        Mock::given(method("GET"))
            .and(path("/apod/astropix.html"))
            .respond_with(ResponseTemplate::new(200).set_body_string(html))
            .mount(server)
            .await;
        format!("{}/apod/astropix.html", server.uri())
    }

    async fn exit_status_for(url: String, save_dir: PathBuf) -> u8 {
        tokio::task::spawn_blocking(move || {
            let cli = Cli::parse_from([
                "apod",
                "--url",
                url.as_str(),
                "--save-dir",
                save_dir.to_str().unwrap(),
            ]);
            exit_status(&download(&cli))
        })
        .await
        .unwrap()
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_video_day_exits_zero() {
        let server = MockServer::start().await;
        let url = serve_page(
            &server,
            r#"<html><body>
                <center>2024 April 8</center>
                <a href="https://www.youtube.com/watch?v=eclipse"><img src="thumb.jpg"></a>
            </body></html>"#,
        )
        .await;
        let dir = tempdir().unwrap();
        let save_dir = dir.path().join("APOD");

        assert_eq!(exit_status_for(url, save_dir.clone()).await, 0);
        assert!(!save_dir.exists());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_saved_image_exits_zero() {
        let server = MockServer::start().await;
        let url = serve_page(
            &server,
            r#"<html><body><center>2024 January 5</center><img src="image.png"></body></html>"#,
        )
        .await;
        Mock::given(method("GET"))
            .and(path("/apod/image.png"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"png".to_vec()))
            .mount(&server)
            .await;
        let dir = tempdir().unwrap();

        assert_eq!(exit_status_for(url, dir.path().to_path_buf()).await, 0);
        assert!(dir.path().join("APOD_2024-01-05.png").exists());
        assert!(dir.path().join("APOD_2024-01-05.txt").exists());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_missing_image_exits_one() {
        let server = MockServer::start().await;
        let url = serve_page(&server, "<html><body><p>Nothing to see.</p></body></html>").await;
        let dir = tempdir().unwrap();
        let save_dir = dir.path().join("APOD");

        assert_eq!(exit_status_for(url, save_dir.clone()).await, 1);
        assert!(!save_dir.exists());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_failed_download_exits_one() {
        let server = MockServer::start().await;
        let url = serve_page(
            &server,
            r#"<html><body><center>2024 January 5</center><img src="gone.jpg"></body></html>"#,
        )
        .await;
        let dir = tempdir().unwrap();

        assert_eq!(exit_status_for(url, dir.path().to_path_buf()).await, 1);
        assert!(!dir.path().join("APOD_2024-01-05.txt").exists());
    }

    #[test]
    fn test_error_exit_status() {
        let result: Result<()> = Err(anyhow::anyhow!("Could not find image URL on the page"));
        assert_eq!(exit_status(&result), 1);
        assert_eq!(exit_status(&Ok(())), 0);
    }
}
