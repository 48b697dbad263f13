use std::path::Path;

use parking_lot::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::text::{DEFAULT_TOP_KEYWORDS, TextAnalyzer};

use super::ArticleRepository;
use super::error::RepositoryError;
use super::types::{Article, ArticleListing, ArticleQuery, ArticleStatus, CandidateText};

/// Article corpus held in memory behind an [`RwLock`].
///
/// Reads (keyword queries) dominate; writes happen only on article
/// submission, status updates, and at seed time.
#[derive(Debug, Default)]
pub struct InMemoryArticleRepository {
    articles: RwLock<Vec<Article>>,
    analyzer: TextAnalyzer,
}

impl InMemoryArticleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a repository from a JSON seed file holding an array of
    /// articles. Articles without keywords get them derived from their
    /// text.
    pub fn from_seed_file(path: &Path) -> Result<Self, RepositoryError> {
        let path_display = path.display().to_string();
        let raw =
            std::fs::read_to_string(path).map_err(|e| RepositoryError::SeedReadFailed {
                path: path_display.clone(),
                source: e,
            })?;

        let articles: Vec<Article> =
            serde_json::from_str(&raw).map_err(|e| RepositoryError::SeedParseFailed {
                path: path_display.clone(),
                source: e,
            })?;

        let repo = Self::new();
        let count = articles.len();
        for article in articles {
            repo.insert(article);
        }

        info!(path = %path_display, count, "seeded article corpus");
        Ok(repo)
    }

    /// Stores an article, deriving keywords from its text when none were
    /// supplied. Returns the stored record.
    pub fn insert(&self, mut article: Article) -> Article {
        if article.keywords.is_empty() {
            article.keywords = self
                .analyzer
                .extract_keywords(&article.text, DEFAULT_TOP_KEYWORDS);
        }
        let stored = article.clone();
        self.articles.write().push(article);
        stored
    }

    /// Snapshot of the corpus in insertion order.
    pub fn list(&self) -> Vec<Article> {
        self.articles.read().clone()
    }

    pub fn len(&self) -> usize {
        self.articles.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.read().is_empty()
    }
}

fn shares_keyword(article: &Article, keywords: &[String]) -> bool {
    article
        .keywords
        .iter()
        .any(|k| keywords.iter().any(|q| q == k))
}

fn matches_filters(article: &Article, query: &ArticleQuery) -> bool {
    if let Some(status) = query.status {
        if article.status != status {
            return false;
        }
    }
    if let Some(ref source) = query.source {
        if &article.source != source {
            return false;
        }
    }
    true
}

impl ArticleRepository for InMemoryArticleRepository {
    async fn find_by_keywords(
        &self,
        keywords: &[String],
        status: ArticleStatus,
    ) -> Result<Vec<CandidateText>, RepositoryError> {
        if keywords.is_empty() {
            return Ok(Vec::new());
        }

        let articles = self.articles.read();
        Ok(articles
            .iter()
            .filter(|a| a.status == status && shares_keyword(a, keywords))
            .map(|a| CandidateText {
                source: Some(a.source.clone()).filter(|s| !s.is_empty()),
                url: a.url.clone(),
                text: a.text.clone(),
            })
            .collect())
    }

    async fn count_matching(&self, keywords: &[String]) -> Result<usize, RepositoryError> {
        if keywords.is_empty() {
            return Ok(0);
        }

        let articles = self.articles.read();
        Ok(articles.iter().filter(|a| shares_keyword(a, keywords)).count())
    }

    async fn insert(&self, article: Article) -> Result<Article, RepositoryError> {
        Ok(Self::insert(self, article))
    }

    async fn query(&self, query: &ArticleQuery) -> Result<ArticleListing, RepositoryError> {
        let articles = self.articles.read();
        let matching: Vec<&Article> = articles
            .iter()
            .filter(|a| matches_filters(a, query))
            .collect();

        let total = matching.len();
        let page = matching
            .into_iter()
            .skip(query.offset)
            .take(query.limit.unwrap_or(usize::MAX))
            .cloned()
            .collect();

        Ok(ArticleListing {
            total,
            articles: page,
        })
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Article>, RepositoryError> {
        let articles = self.articles.read();
        Ok(articles.iter().find(|a| a.id == id).cloned())
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: ArticleStatus,
    ) -> Result<Option<Article>, RepositoryError> {
        let mut articles = self.articles.write();
        Ok(articles.iter_mut().find(|a| a.id == id).map(|article| {
            article.status = status;
            article.clone()
        }))
    }
}
