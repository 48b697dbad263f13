use thiserror::Error;

/// Errors from fetching and extracting a page.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid url '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    #[error("request to '{url}' failed: {source}")]
    RequestFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("'{url}' returned status {status}")]
    BadStatus { url: String, status: u16 },

    #[error("failed to read body from '{url}': {source}")]
    BodyReadFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("'{url}' yielded no extractable text")]
    EmptyBody { url: String },
}
