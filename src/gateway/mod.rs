//! HTTP gateway (Axum) for verification, analysis, and the article corpus.
//!
//! This module is primarily used by the `veracity` server binary.

#![allow(missing_docs)]

pub mod error;
pub mod handler;
pub mod payload;
pub mod state;


use axum::{
    Json, Router,
    http::{HeaderMap, StatusCode, header::HeaderValue},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use handler::{
    analyze_credibility_handler, compare_sources_handler, create_article_handler,
    get_article_handler, history_handler, list_articles_handler, trusted_sources_handler,
    update_article_status_handler, verify_handler,
};
pub use state::HandlerState;

use crate::fetcher::PageFetcher;
use crate::reliability::TrustRegistry;
use crate::repository::ArticleRepository;

/// Response header carrying the gateway's machine-readable status.
pub const VERACITY_STATUS_HEADER: &str = "x-veracity-status";
pub const VERACITY_STATUS_HEALTHY: &str = "healthy";
pub const VERACITY_STATUS_READY: &str = "ready";

pub fn create_router_with_state<R, F, T>(state: HandlerState<R, F, T>) -> Router
where
    R: ArticleRepository + 'static,
    F: PageFetcher + 'static,
    T: TrustRegistry + 'static,
{
    Router::new()
        .route("/healthz", get(health_handler))
        .route("/ready", get(ready_handler))
        .route("/api/verify", post(verify_handler))
        .route(
            "/api/verify/analyze-credibility",
            post(analyze_credibility_handler),
        )
        .route("/api/verify/compare-sources", post(compare_sources_handler))
        .route("/api/verify/history", get(history_handler))
        .route(
            "/api/articles",
            get(list_articles_handler).post(create_article_handler),
        )
        .route("/api/articles/sources", get(trusted_sources_handler))
        .route(
            "/api/articles/{id}",
            get(get_article_handler).put(update_article_status_handler),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[derive(serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(serde::Serialize)]
pub struct ReadyResponse {
    pub status: &'static str,
    pub components: ComponentStatus,
}

#[derive(serde::Serialize)]
pub struct ComponentStatus {
    pub http: &'static str,
    pub repository: &'static str,
    pub registry: &'static str,
}

#[tracing::instrument]
pub async fn health_handler() -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(
        VERACITY_STATUS_HEADER,
        HeaderValue::from_static(VERACITY_STATUS_HEALTHY),
    );

    (
        StatusCode::OK,
        headers,
        Json(HealthResponse { status: "ok" }),
    )
        .into_response()
}

#[tracing::instrument]
pub async fn ready_handler() -> Response {
    // Collaborators are wired at startup and hold no live connections to
    // check; readiness follows process liveness.
    let components = ComponentStatus {
        http: VERACITY_STATUS_READY,
        repository: VERACITY_STATUS_READY,
        registry: VERACITY_STATUS_READY,
    };

    let mut headers = HeaderMap::new();
    headers.insert(
        VERACITY_STATUS_HEADER,
        HeaderValue::from_static(VERACITY_STATUS_READY),
    );

    (
        StatusCode::OK,
        headers,
        Json(ReadyResponse {
            status: "ok",
            components,
        }),
    )
        .into_response()
}
