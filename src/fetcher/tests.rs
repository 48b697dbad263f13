use std::time::Duration;

use super::http::{extract_text, HttpPageFetcher};
use super::mock::MockPageFetcher;
use super::{FetchError, PageFetcher};

#[test]
fn extracts_visible_text() {
    let html = r#"
        <html>
          <head><title>Ignored head chrome</title></head>
          <body>
            <h1>Quake hits coast</h1>
            <p>A magnitude 6  earthquake struck
               the northern coast.</p>
          </body>
        </html>
    "#;

    let text = extract_text(html);
    assert!(text.contains("Quake hits coast"));
    assert!(text.contains("A magnitude 6 earthquake struck the northern coast."));
}

#[test]
fn skips_script_style_and_noscript() {
    let html = r#"
        <body>
          <script>var tracking = "hidden";</script>
          <style>body { color: red; }</style>
          <noscript>enable javascript</noscript>
          <p>Visible paragraph</p>
        </body>
    "#;

    let text = extract_text(html);
    assert_eq!(text, "Visible paragraph");
}

#[test]
fn collapses_whitespace() {
    let text = extract_text("<p>one</p>\n\n<p>two\t three</p>");
    assert_eq!(text, "one two three");
}

#[test]
fn plain_text_passes_through() {
    assert_eq!(extract_text("just words"), "just words");
}

#[tokio::test]
async fn rejects_non_http_schemes() {
    let fetcher = HttpPageFetcher::new(Duration::from_secs(1), 10).expect("client");

    let err = fetcher
        .fetch_text("ftp://files.example/article")
        .await
        .expect_err("scheme rejected");
    assert!(matches!(err, FetchError::InvalidUrl { .. }));
}

#[tokio::test]
async fn rejects_unparseable_urls() {
    let fetcher = HttpPageFetcher::new(Duration::from_secs(1), 10).expect("client");

    let err = fetcher
        .fetch_text("not a url at all")
        .await
        .expect_err("parse rejected");
    assert!(matches!(err, FetchError::InvalidUrl { .. }));
}

#[tokio::test]
async fn mock_serves_canned_pages_and_failures() {
    let fetcher = MockPageFetcher::new()
        .with_page("https://a.example/ok", "page body")
        .with_failure("https://a.example/down");

    let body = fetcher.fetch_text("https://a.example/ok").await.expect("fetch");
    assert_eq!(body, "page body");

    let err = fetcher
        .fetch_text("https://a.example/down")
        .await
        .expect_err("injected failure");
    assert!(matches!(err, FetchError::BadStatus { status: 503, .. }));

    let err = fetcher
        .fetch_text("https://a.example/missing")
        .await
        .expect_err("unknown url");
    assert!(matches!(err, FetchError::BadStatus { status: 404, .. }));
}
