//! Live page retrieval.
//!
//! When a verification query is a URL, the page body has to be fetched and
//! reduced to plain text before analysis. [`PageFetcher`] is the seam;
//! [`HttpPageFetcher`] is the reqwest-backed implementation with a bounded
//! URL-to-text cache.

pub mod error;
pub mod http;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

#[cfg(test)]
mod tests;

pub use error::FetchError;
pub use http::HttpPageFetcher;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockPageFetcher;

/// Fetches a page and returns its visible text.
pub trait PageFetcher: Send + Sync {
    fn fetch_text(
        &self,
        url: &str,
    ) -> impl std::future::Future<Output = Result<String, FetchError>> + Send;
}
