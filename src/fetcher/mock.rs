use std::collections::HashMap;

use super::error::FetchError;
use super::PageFetcher;

/// Canned-page fetcher for tests, with per-URL failure injection.
#[derive(Debug, Clone, Default)]
pub struct MockPageFetcher {
    pages: HashMap<String, String>,
    failing_urls: Vec<String>,
}

impl MockPageFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: impl Into<String>, text: impl Into<String>) -> Self {
        self.pages.insert(url.into(), text.into());
        self
    }

    /// Marks a URL so fetching it returns a request failure.
    pub fn with_failure(mut self, url: impl Into<String>) -> Self {
        self.failing_urls.push(url.into());
        self
    }
}

impl PageFetcher for MockPageFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        if self.failing_urls.iter().any(|u| u == url) {
            return Err(FetchError::BadStatus {
                url: url.to_string(),
                status: 503,
            });
        }

        match self.pages.get(url) {
            Some(text) => Ok(text.clone()),
            None => Err(FetchError::BadStatus {
                url: url.to_string(),
                status: 404,
            }),
        }
    }
}
