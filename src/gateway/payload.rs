use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::history::LogEntry;
use crate::reliability::TrustedSource;
use crate::repository::{Article, ArticleStatus};
use crate::verify::VerificationResult;

/// Body of `POST /api/verify`.
///
/// Fields are optional so missing values surface as validation errors
/// rather than deserialization failures.
#[derive(Debug, Deserialize)]
pub struct VerifyRequest {
    pub query: Option<String>,
    pub depth: Option<String>,
}

/// Body of `POST /api/verify/analyze-credibility`.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub url: Option<String>,
}

/// Body of `POST /api/verify/compare-sources`.
#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    pub urls: Option<Vec<String>>,
}

/// Body of `POST /api/articles`.
#[derive(Debug, Deserialize)]
pub struct CreateArticleRequest {
    pub url: Option<String>,
    pub source: Option<String>,
    pub text: Option<String>,
    #[serde(default)]
    pub status: Option<ArticleStatus>,
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
}

/// Body of `PUT /api/articles/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateArticleRequest {
    pub status: Option<ArticleStatus>,
}

/// Query parameters of `GET /api/articles`.
#[derive(Debug, Deserialize)]
pub struct ListArticlesParams {
    pub status: Option<ArticleStatus>,
    pub source: Option<String>,
    pub limit: Option<usize>,
    #[serde(default)]
    pub offset: usize,
}

/// Query parameters of `GET /api/verify/history`.
#[derive(Debug, Deserialize)]
pub struct HistoryParams {
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub request_id: Uuid,
    #[serde(flatten)]
    pub result: VerificationResult,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub count: usize,
    pub entries: Vec<LogEntry>,
}

#[derive(Debug, Serialize)]
pub struct ArticlesResponse {
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
    pub articles: Vec<Article>,
}

#[derive(Debug, Serialize)]
pub struct CreateArticleResponse {
    pub status: &'static str,
    pub article: Article,
}

#[derive(Debug, Serialize)]
pub struct TrustedSourcesResponse {
    pub total: usize,
    pub sources: Vec<TrustedSource>,
}
