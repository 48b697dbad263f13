use thiserror::Error;

use crate::fetcher::FetchError;

/// Errors from the verification entry points.
///
/// Input errors are rejected before any computation; collaborator failures
/// that cannot be degraded (the sole page of an analysis, every page of a
/// comparison) surface here as structured errors.
#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("query must not be empty")]
    EmptyQuery,

    #[error("comparison requires at least two urls, got {got}")]
    TooFewUrls { got: usize },

    #[error("failed to fetch '{url}': {source}")]
    FetchFailed {
        url: String,
        #[source]
        source: FetchError,
    },

    #[error("none of the requested pages could be retrieved")]
    NoArticles,
}
