use std::sync::Arc;
use std::time::Duration;

use moka::sync::Cache;
use scraper::{ElementRef, Html};
use tracing::debug;
use url::Url;

use super::error::FetchError;
use super::PageFetcher;

const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";

/// Elements whose text never belongs in the extracted body.
const SKIPPED_ELEMENTS: [&str; 3] = ["script", "style", "noscript"];

/// HTTP page fetcher with a bounded URL-to-text cache.
///
/// Extracted text is cached by URL so repeated analyses of the same page
/// skip the network round trip.
#[derive(Clone)]
pub struct HttpPageFetcher {
    client: reqwest::Client,
    cache: Cache<String, Arc<String>>,
}

impl HttpPageFetcher {
    pub fn new(timeout: Duration, cache_capacity: u64) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            cache: Cache::new(cache_capacity),
        })
    }

    fn validate_url(url: &str) -> Result<Url, FetchError> {
        let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        match parsed.scheme() {
            "http" | "https" => Ok(parsed),
            other => Err(FetchError::InvalidUrl {
                url: url.to_string(),
                message: format!("unsupported scheme '{other}'"),
            }),
        }
    }
}

impl PageFetcher for HttpPageFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        let parsed = Self::validate_url(url)?;

        if let Some(cached) = self.cache.get(url) {
            debug!(url = %url, "page cache hit");
            return Ok(cached.as_ref().clone());
        }

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|e| FetchError::RequestFailed {
                url: url.to_string(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::BadStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::BodyReadFailed {
                url: url.to_string(),
                source: e,
            })?;

        let text = extract_text(&body);
        if text.is_empty() {
            return Err(FetchError::EmptyBody {
                url: url.to_string(),
            });
        }

        self.cache.insert(url.to_string(), Arc::new(text.clone()));
        Ok(text)
    }
}

/// Reduces an HTML document to its visible text, whitespace-collapsed.
pub(crate) fn extract_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut raw = String::new();
    collect_text(document.root_element(), &mut raw);
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn collect_text(element: ElementRef<'_>, out: &mut String) {
    if SKIPPED_ELEMENTS.contains(&element.value().name()) {
        return;
    }

    for node in element.children() {
        if let Some(text) = node.value().as_text() {
            out.push_str(text);
            out.push(' ');
        } else if let Some(child) = ElementRef::wrap(node) {
            collect_text(child, out);
        }
    }
}
