use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::fetcher::PageFetcher;
use crate::reliability::TrustRegistry;
use crate::repository::{Article, ArticleQuery, ArticleRepository, ArticleStatus};
use crate::verify::VerificationDepth;

use super::error::GatewayError;
use super::payload::{
    AnalyzeRequest, ArticlesResponse, CompareRequest, CreateArticleRequest,
    CreateArticleResponse, HistoryParams, HistoryResponse, ListArticlesParams,
    TrustedSourcesResponse, UpdateArticleRequest, VerifyRequest, VerifyResponse,
};
use super::state::HandlerState;

const DEFAULT_HISTORY_LIMIT: usize = 50;
const DEFAULT_ARTICLE_LIMIT: usize = 20;

#[instrument(skip(state, request))]
pub async fn verify_handler<R, F, T>(
    State(state): State<HandlerState<R, F, T>>,
    Json(request): Json<VerifyRequest>,
) -> Result<Response, GatewayError>
where
    R: ArticleRepository + 'static,
    F: PageFetcher + 'static,
    T: TrustRegistry + 'static,
{
    let query = request
        .query
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or_else(|| GatewayError::InvalidRequest("'query' is required".to_string()))?;

    let depth = match request.depth.as_deref() {
        Some(raw) => raw
            .parse::<VerificationDepth>()
            .map_err(GatewayError::InvalidRequest)?,
        None => VerificationDepth::default(),
    };

    debug!(depth = %depth, "verification requested");

    let result = state
        .service
        .verify(query, depth)
        .await
        .map_err(|e| GatewayError::from_verify(e, "verify"))?;

    let request_id = state.history.record(query, &result);
    info!(%request_id, verified = result.is_verified, "verification recorded");

    Ok(Json(VerifyResponse { request_id, result }).into_response())
}

#[instrument(skip(state, request))]
pub async fn analyze_credibility_handler<R, F, T>(
    State(state): State<HandlerState<R, F, T>>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Response, GatewayError>
where
    R: ArticleRepository + 'static,
    F: PageFetcher + 'static,
    T: TrustRegistry + 'static,
{
    let url = request
        .url
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .ok_or_else(|| GatewayError::InvalidRequest("'url' is required".to_string()))?;

    let profile = state
        .service
        .analyze_credibility(url)
        .await
        .map_err(|e| GatewayError::from_verify(e, "analyze"))?;

    Ok(Json(profile).into_response())
}

#[instrument(skip(state, request))]
pub async fn compare_sources_handler<R, F, T>(
    State(state): State<HandlerState<R, F, T>>,
    Json(request): Json<CompareRequest>,
) -> Result<Response, GatewayError>
where
    R: ArticleRepository + 'static,
    F: PageFetcher + 'static,
    T: TrustRegistry + 'static,
{
    let urls = request.urls.unwrap_or_default();
    if urls.len() < 2 {
        return Err(GatewayError::InvalidRequest(format!(
            "'urls' must contain at least two entries, got {}",
            urls.len()
        )));
    }

    let comparison = state
        .service
        .compare_sources(&urls)
        .await
        .map_err(|e| GatewayError::from_verify(e, "compare"))?;

    Ok(Json(comparison).into_response())
}

#[instrument(skip(state))]
pub async fn history_handler<R, F, T>(
    State(state): State<HandlerState<R, F, T>>,
    Query(params): Query<HistoryParams>,
) -> Result<Response, GatewayError>
where
    R: ArticleRepository + 'static,
    F: PageFetcher + 'static,
    T: TrustRegistry + 'static,
{
    let limit = params.limit.unwrap_or(DEFAULT_HISTORY_LIMIT);
    let entries = state.history.recent(limit);

    Ok(Json(HistoryResponse {
        count: entries.len(),
        entries,
    })
    .into_response())
}

#[instrument(skip(state))]
pub async fn list_articles_handler<R, F, T>(
    State(state): State<HandlerState<R, F, T>>,
    Query(params): Query<ListArticlesParams>,
) -> Result<Response, GatewayError>
where
    R: ArticleRepository + 'static,
    F: PageFetcher + 'static,
    T: TrustRegistry + 'static,
{
    let limit = params.limit.unwrap_or(DEFAULT_ARTICLE_LIMIT);
    let query = ArticleQuery {
        status: Some(params.status.unwrap_or(ArticleStatus::Verified)),
        source: params.source,
        limit: Some(limit),
        offset: params.offset,
    };

    let listing = state
        .repository
        .query(&query)
        .await
        .map_err(|e| GatewayError::RepositoryError(e.to_string()))?;

    Ok(Json(ArticlesResponse {
        total: listing.total,
        limit,
        offset: query.offset,
        articles: listing.articles,
    })
    .into_response())
}

#[instrument(skip(state))]
pub async fn get_article_handler<R, F, T>(
    State(state): State<HandlerState<R, F, T>>,
    Path(id): Path<Uuid>,
) -> Result<Response, GatewayError>
where
    R: ArticleRepository + 'static,
    F: PageFetcher + 'static,
    T: TrustRegistry + 'static,
{
    let article = state
        .repository
        .find_by_id(id)
        .await
        .map_err(|e| GatewayError::RepositoryError(e.to_string()))?
        .ok_or_else(|| GatewayError::NotFound(format!("article {id}")))?;

    Ok(Json(article).into_response())
}

#[instrument(skip(state, request))]
pub async fn update_article_status_handler<R, F, T>(
    State(state): State<HandlerState<R, F, T>>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateArticleRequest>,
) -> Result<Response, GatewayError>
where
    R: ArticleRepository + 'static,
    F: PageFetcher + 'static,
    T: TrustRegistry + 'static,
{
    let status = request
        .status
        .ok_or_else(|| GatewayError::InvalidRequest("'status' is required".to_string()))?;

    let article = state
        .repository
        .update_status(id, status)
        .await
        .map_err(|e| GatewayError::RepositoryError(e.to_string()))?
        .ok_or_else(|| GatewayError::NotFound(format!("article {id}")))?;

    info!(%id, status = ?article.status, "article status updated");

    Ok(Json(article).into_response())
}

#[instrument(skip(state))]
pub async fn trusted_sources_handler<R, F, T>(
    State(state): State<HandlerState<R, F, T>>,
) -> Result<Response, GatewayError>
where
    R: ArticleRepository + 'static,
    F: PageFetcher + 'static,
    T: TrustRegistry + 'static,
{
    let sources = state
        .registry
        .entries()
        .await
        .map_err(|e| GatewayError::RepositoryError(e.to_string()))?;

    Ok(Json(TrustedSourcesResponse {
        total: sources.len(),
        sources,
    })
    .into_response())
}

#[instrument(skip(state, request))]
pub async fn create_article_handler<R, F, T>(
    State(state): State<HandlerState<R, F, T>>,
    Json(request): Json<CreateArticleRequest>,
) -> Result<Response, GatewayError>
where
    R: ArticleRepository + 'static,
    F: PageFetcher + 'static,
    T: TrustRegistry + 'static,
{
    let url = required_field(request.url, "url")?;
    let source = required_field(request.source, "source")?;
    let text = required_field(request.text, "text")?;

    let article = Article::new(url, source, text)
        .with_status(request.status.unwrap_or(ArticleStatus::Pending))
        .with_keywords(request.keywords.unwrap_or_default());

    let article = state
        .repository
        .insert(article)
        .await
        .map_err(|e| GatewayError::RepositoryError(e.to_string()))?;

    Ok((
        StatusCode::CREATED,
        Json(CreateArticleResponse {
            status: "created",
            article,
        }),
    )
        .into_response())
}

fn required_field(value: Option<String>, name: &str) -> Result<String, GatewayError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| GatewayError::InvalidRequest(format!("'{name}' is required")))
}
