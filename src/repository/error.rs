use thiserror::Error;

/// Errors from loading or querying the article corpus.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("failed to read article seed file '{path}': {source}")]
    SeedReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse article seed file '{path}': {source}")]
    SeedParseFailed {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("article query failed: {0}")]
    QueryFailed(String),
}
