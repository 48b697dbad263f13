//! Veracity library crate (used by the server binary and integration tests).
//!
//! # Public API Surface
//!
//! The exports are organized by module:
//!
//! ## Core Pipeline
//! - [`TextAnalyzer`] - keyword extraction, sentiment, pairwise similarity
//! - [`SourceReliabilityResolver`], [`TrustRegistry`] - source trust lookup
//! - [`CredibilityScorer`], [`CredibilityWeights`] - weighted signal aggregation
//! - [`VerificationService`] - end-to-end orchestration
//!
//! ## Collaborators
//! - [`ArticleRepository`], [`InMemoryArticleRepository`] - article corpus
//! - [`PageFetcher`], [`HttpPageFetcher`] - live page retrieval
//!
//! ## Ambient
//! - [`Config`], [`ConfigError`] - server configuration
//! - [`VerificationLog`] - bounded verification history
//! - `gateway` - Axum HTTP surface
//!
//! ## Test/Mock Support
//! Mock implementations are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod config;
pub mod fetcher;
pub mod gateway;
pub mod history;
pub mod reliability;
pub mod repository;
pub mod scoring;
pub mod text;
pub mod verify;

pub use config::{Config, ConfigError};
pub use fetcher::{FetchError, HttpPageFetcher, PageFetcher};
pub use history::{LogEntry, VerificationLog};
pub use reliability::{
    DEFAULT_TRUST_SCORE, FileTrustRegistry, RegistryError, ReliabilityMap,
    SourceReliabilityResolver, TrustRegistry, TrustedSource,
};
pub use repository::{
    Article, ArticleListing, ArticleQuery, ArticleRepository, ArticleStatus, CandidateText,
    InMemoryArticleRepository, RepositoryError,
};
pub use scoring::{
    Assessment, CredibilityScorer, CredibilitySignals, CredibilityWeights,
    MisinformationReport, SourceCredibility, VERIFICATION_THRESHOLD,
};
pub use text::{DEFAULT_TOP_KEYWORDS, TextAnalyzer, TextStats};
pub use verify::{
    ComparisonResult, CredibilityProfile, VerificationDepth, VerificationResult,
    VerificationService, VerifyError,
};

#[cfg(any(test, feature = "mock"))]
pub use fetcher::MockPageFetcher;
#[cfg(any(test, feature = "mock"))]
pub use reliability::StaticTrustRegistry;
