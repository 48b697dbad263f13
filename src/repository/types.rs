use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle state of a stored article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    Verified,
    #[default]
    Pending,
    Rejected,
}

impl ArticleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Verified => "verified",
            Self::Pending => "pending",
            Self::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored news article.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    /// Stable identifier, generated when the record enters the corpus.
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub url: String,
    pub source: String,
    pub text: String,
    #[serde(default)]
    pub status: ArticleStatus,
    /// Index terms. Derived from `text` at insert time when absent.
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl Article {
    pub fn new(
        url: impl Into<String>,
        source: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            url: url.into(),
            source: source.into(),
            text: text.into(),
            status: ArticleStatus::default(),
            keywords: Vec::new(),
        }
    }

    pub fn with_status(mut self, status: ArticleStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_keywords(mut self, keywords: Vec<String>) -> Self {
        self.keywords = keywords;
        self
    }
}

/// Filters and paging for a corpus listing.
#[derive(Debug, Clone, Default)]
pub struct ArticleQuery {
    pub status: Option<ArticleStatus>,
    pub source: Option<String>,
    pub limit: Option<usize>,
    pub offset: usize,
}

/// One page of a corpus listing plus the unpaged total.
#[derive(Debug, Clone)]
pub struct ArticleListing {
    /// Articles matching the filters, before paging.
    pub total: usize,
    pub articles: Vec<Article>,
}

/// Text of a matching article, carried into consistency analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateText {
    /// Publishing source, when the corpus records one.
    pub source: Option<String>,
    pub url: String,
    pub text: String,
}
