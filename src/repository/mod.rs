//! Article storage and keyword-based retrieval.
//!
//! The repository is the corpus a verification run searches for
//! corroborating coverage. The seam is [`ArticleRepository`]; the shipped
//! implementation is [`InMemoryArticleRepository`], optionally seeded from
//! a JSON file at startup.

pub mod error;
pub mod store;
pub mod types;


pub use error::RepositoryError;
pub use store::InMemoryArticleRepository;
pub use types::{Article, ArticleListing, ArticleQuery, ArticleStatus, CandidateText};

use uuid::Uuid;

/// Retrieval interface over the article corpus.
pub trait ArticleRepository: Send + Sync {
    /// Returns the text of every article in `status` sharing at least one
    /// keyword with `keywords`, in insertion order.
    fn find_by_keywords(
        &self,
        keywords: &[String],
        status: ArticleStatus,
    ) -> impl std::future::Future<Output = Result<Vec<CandidateText>, RepositoryError>> + Send;

    /// Counts articles of any status sharing at least one keyword with
    /// `keywords`.
    fn count_matching(
        &self,
        keywords: &[String],
    ) -> impl std::future::Future<Output = Result<usize, RepositoryError>> + Send;

    /// Stores an article and returns the stored record (keywords derived
    /// from the text when none were supplied).
    fn insert(
        &self,
        article: Article,
    ) -> impl std::future::Future<Output = Result<Article, RepositoryError>> + Send;

    /// Filtered, paged listing in insertion order.
    fn query(
        &self,
        query: &ArticleQuery,
    ) -> impl std::future::Future<Output = Result<ArticleListing, RepositoryError>> + Send;

    /// Looks up one article by its identifier.
    fn find_by_id(
        &self,
        id: Uuid,
    ) -> impl std::future::Future<Output = Result<Option<Article>, RepositoryError>> + Send;

    /// Moves an article to a new lifecycle status. Returns the updated
    /// record, or `None` when the id is unknown.
    fn update_status(
        &self,
        id: Uuid,
        status: ArticleStatus,
    ) -> impl std::future::Future<Output = Result<Option<Article>, RepositoryError>> + Send;
}
