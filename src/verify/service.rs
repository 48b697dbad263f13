use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::fetcher::PageFetcher;
use crate::reliability::{SourceReliabilityResolver, TrustRegistry};
use crate::repository::{ArticleRepository, ArticleStatus, CandidateText};
use crate::scoring::{CredibilityScorer, VERIFICATION_THRESHOLD};
use crate::text::{DEFAULT_TOP_KEYWORDS, TextAnalyzer};

use super::error::VerifyError;
use super::types::{
    ComparisonResult, CredibilityProfile, VerificationDepth, VerificationResult,
};

/// How many shared keywords a comparison reports.
const COMMON_KEYWORD_LIMIT: usize = 5;

/// Consistency above this reads as agreeing coverage.
const CONSISTENT_VERDICT_THRESHOLD: f32 = 0.7;

/// Cap on the similar-article count reported by a credibility profile.
const SIMILAR_ARTICLE_LIMIT: usize = 10;

/// End-to-end verification over the repository, fetcher, and registry
/// collaborators.
///
/// Every entry point is a one-shot computation; collaborator failures
/// degrade (a failed fetch skips that candidate, a repository error yields
/// an empty candidate set) instead of aborting the run.
#[derive(Debug, Clone)]
pub struct VerificationService<R, F, T>
where
    R: ArticleRepository,
    F: PageFetcher,
    T: TrustRegistry,
{
    repository: Arc<R>,
    fetcher: Arc<F>,
    resolver: SourceReliabilityResolver<T>,
    analyzer: TextAnalyzer,
    scorer: CredibilityScorer,
}

impl<R, F, T> VerificationService<R, F, T>
where
    R: ArticleRepository,
    F: PageFetcher,
    T: TrustRegistry,
{
    pub fn new(repository: Arc<R>, fetcher: Arc<F>, registry: Arc<T>) -> Self {
        Self {
            repository,
            fetcher,
            resolver: SourceReliabilityResolver::new(registry),
            analyzer: TextAnalyzer::new(),
            scorer: CredibilityScorer::new(),
        }
    }

    /// Verifies a story query against the corpus and, when the query is a
    /// URL, its live page.
    #[instrument(skip(self, query), fields(depth = %depth))]
    pub async fn verify(
        &self,
        query: &str,
        depth: VerificationDepth,
    ) -> Result<VerificationResult, VerifyError> {
        if query.trim().is_empty() {
            return Err(VerifyError::EmptyQuery);
        }

        let keywords = self.analyzer.extract_keywords(query, DEFAULT_TOP_KEYWORDS);
        let mut candidates = self.gather_candidates(&keywords).await;

        if let Some(url) = as_http_url(query) {
            match self.fetcher.fetch_text(url.as_str()).await {
                Ok(text) => candidates.push(CandidateText {
                    source: None,
                    url: query.to_string(),
                    text,
                }),
                Err(e) => {
                    warn!(url = %query, error = %e, "query page fetch failed, skipping candidate");
                }
            }
        }

        if candidates.is_empty() {
            debug!("no candidates matched the query");
            return Ok(VerificationResult::no_candidates(keywords, depth));
        }

        let sources: BTreeSet<String> = candidates
            .iter()
            .filter_map(|c| c.source.clone())
            .collect();

        let reliability = self.resolver.resolve(&sources).await;
        let consistency = self.consecutive_consistency(&candidates);
        let spread_pattern = candidates.len() > 1;
        let original_reporting = !candidates.is_empty();

        let details = self.scorer.resolve_signals(
            sources.len(),
            &reliability,
            consistency,
            spread_pattern,
            original_reporting,
        );
        let credibility_score = self.scorer.score_signals(&details);

        // Corroboration is mandatory: one source alone never verifies.
        let is_verified = credibility_score >= VERIFICATION_THRESHOLD && sources.len() > 1;

        info!(
            score = credibility_score,
            verified = is_verified,
            candidates = candidates.len(),
            sources = sources.len(),
            "verification complete"
        );

        Ok(VerificationResult {
            is_verified,
            credibility_score,
            verified_sources: sources.len(),
            is_original: original_reporting,
            status: if is_verified { "Verified" } else { "Unverified" }.to_string(),
            sources,
            keywords,
            details,
            depth,
        })
    }

    /// Deep analysis of a single page: sentiment, keywords, corpus overlap,
    /// manipulation heuristics, misinformation indicators.
    #[instrument(skip(self))]
    pub async fn analyze_credibility(
        &self,
        url: &str,
    ) -> Result<CredibilityProfile, VerifyError> {
        if url.trim().is_empty() {
            return Err(VerifyError::EmptyQuery);
        }

        let text = self
            .fetcher
            .fetch_text(url)
            .await
            .map_err(|e| VerifyError::FetchFailed {
                url: url.to_string(),
                source: e,
            })?;

        let sentiment_score = self.analyzer.analyze_sentiment(&text);
        let keywords = self.analyzer.extract_keywords(&text, DEFAULT_TOP_KEYWORDS);

        let similar_articles = match self.repository.count_matching(&keywords).await {
            Ok(count) => count.min(SIMILAR_ARTICLE_LIMIT),
            Err(e) => {
                warn!(error = %e, "similar-article count failed, reporting zero");
                0
            }
        };

        let misinformation = self
            .scorer
            .detect_misinformation_indicators(&text, sentiment_score);

        Ok(CredibilityProfile {
            url: url.to_string(),
            sentiment_score,
            keywords,
            similar_articles,
            manipulation_score: self.analyzer.detect_sensationalism(&text),
            misinformation,
            analysis_timestamp: Utc::now(),
        })
    }

    /// Compares coverage across explicit urls: pairwise consistency, shared
    /// keywords, and per-host reliability.
    #[instrument(skip(self, urls), fields(urls = urls.len()))]
    pub async fn compare_sources(
        &self,
        urls: &[String],
    ) -> Result<ComparisonResult, VerifyError> {
        if urls.len() < 2 {
            return Err(VerifyError::TooFewUrls { got: urls.len() });
        }

        let mut pages: Vec<(String, String)> = Vec::with_capacity(urls.len());
        for url in urls {
            match self.fetcher.fetch_text(url).await {
                Ok(text) => pages.push((host_of(url), text)),
                Err(e) => warn!(url = %url, error = %e, "fetch failed, skipping url"),
            }
        }

        if pages.is_empty() {
            return Err(VerifyError::NoArticles);
        }

        let consistency_score = if pages.len() < 2 {
            1.0
        } else {
            let sum: f32 = pages
                .windows(2)
                .map(|w| self.analyzer.calculate_similarity(&w[0].1, &w[1].1))
                .sum();
            sum / (pages.len() - 1) as f32
        };

        let common_keywords = self.common_keywords(&pages);

        let hosts: BTreeSet<String> = pages.iter().map(|(host, _)| host.clone()).collect();
        let source_reliability = self.resolver.resolve(&hosts).await;

        let verdict = if consistency_score > CONSISTENT_VERDICT_THRESHOLD {
            "Consistent reporting"
        } else {
            "Inconsistent reporting"
        };

        Ok(ComparisonResult {
            compared_sources: pages.len(),
            consistency_score,
            common_keywords,
            source_reliability,
            verdict: verdict.to_string(),
        })
    }

    async fn gather_candidates(&self, keywords: &[String]) -> Vec<CandidateText> {
        match self
            .repository
            .find_by_keywords(keywords, ArticleStatus::Verified)
            .await
        {
            Ok(candidates) => candidates,
            Err(e) => {
                warn!(error = %e, "repository query failed, proceeding without corpus candidates");
                Vec::new()
            }
        }
    }

    /// Mean similarity over consecutive candidate pairs in retrieval order.
    ///
    /// Fewer than two candidates are vacuously consistent. Adjacent-pair
    /// sampling (not all pairs) is the contract callers rely on.
    fn consecutive_consistency(&self, candidates: &[CandidateText]) -> f32 {
        if candidates.len() < 2 {
            return 1.0;
        }

        let sum: f32 = candidates
            .windows(2)
            .map(|w| self.analyzer.calculate_similarity(&w[0].text, &w[1].text))
            .sum();
        sum / (candidates.len() - 1) as f32
    }

    /// Most frequent keywords across the compared pages, capped at
    /// [`COMMON_KEYWORD_LIMIT`], ties broken alphabetically.
    fn common_keywords(&self, pages: &[(String, String)]) -> Vec<String> {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for (_, text) in pages {
            for keyword in self.analyzer.extract_keywords(text, DEFAULT_TOP_KEYWORDS) {
                *counts.entry(keyword).or_insert(0) += 1;
            }
        }

        let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked
            .into_iter()
            .take(COMMON_KEYWORD_LIMIT)
            .map(|(keyword, _)| keyword)
            .collect()
    }
}

fn as_http_url(query: &str) -> Option<Url> {
    let parsed = Url::parse(query.trim()).ok()?;
    matches!(parsed.scheme(), "http" | "https").then_some(parsed)
}

fn host_of(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_else(|| url.to_string())
}
