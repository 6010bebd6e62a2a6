use std::fs;
use std::path::PathBuf;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src/tests/fixtures")
}

/// Load test HTML fixture by name
pub fn load_html_fixture(fixture_name: &str) -> String {
    let path = fixtures_dir().join(format!("{}.html", fixture_name));
    fs::read_to_string(path)
        .unwrap_or_else(|_| panic!("Failed to load test fixture: {}", fixture_name))
}

/// The page used by the end-to-end scenario: no link around the image.
pub const MINIMAL_APOD: &str = r#"
<html>
<body>
    <center>2024 January 5</center>
    <center><b>Test Title</b></center>
    <p><b>Explanation:</b> Some text.</p>
    <img src="image.jpg">
</body>
</html>
"#;
