use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::reliability::ReliabilityMap;
use crate::scoring::{CredibilitySignals, MisinformationReport};

/// How much work a verification run is asked to do.
///
/// Depth is validated and echoed on the result; all depths currently share
/// one scoring configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum VerificationDepth {
    Basic,
    #[default]
    Standard,
    Deep,
}

impl VerificationDepth {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Standard => "standard",
            Self::Deep => "deep",
        }
    }
}

impl std::fmt::Display for VerificationDepth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for VerificationDepth {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(Self::Basic),
            "standard" => Ok(Self::Standard),
            "deep" => Ok(Self::Deep),
            other => Err(format!("unknown verification depth '{other}'")),
        }
    }
}

/// Outcome of one verification run, intermediate signals included.
#[derive(Debug, Clone, Serialize)]
pub struct VerificationResult {
    pub is_verified: bool,
    pub credibility_score: f32,
    /// Count of distinct known sources, not of candidate texts.
    pub verified_sources: usize,
    pub is_original: bool,
    pub status: String,
    pub sources: BTreeSet<String>,
    pub keywords: Vec<String>,
    pub details: CredibilitySignals,
    pub depth: VerificationDepth,
}

impl VerificationResult {
    /// Result for a query that matched nothing in the corpus.
    pub(crate) fn no_candidates(keywords: Vec<String>, depth: VerificationDepth) -> Self {
        Self {
            is_verified: false,
            credibility_score: 0.0,
            verified_sources: 0,
            is_original: false,
            status: "No matching articles found".to_string(),
            sources: BTreeSet::new(),
            keywords,
            details: CredibilitySignals::default(),
            depth,
        }
    }
}

/// Deep analysis of a single page.
#[derive(Debug, Clone, Serialize)]
pub struct CredibilityProfile {
    pub url: String,
    pub sentiment_score: f32,
    pub keywords: Vec<String>,
    /// Corpus articles sharing at least one keyword with the page.
    pub similar_articles: usize,
    pub manipulation_score: f32,
    pub misinformation: MisinformationReport,
    pub analysis_timestamp: DateTime<Utc>,
}

/// Cross-source consistency comparison over explicit urls.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonResult {
    pub compared_sources: usize,
    pub consistency_score: f32,
    /// Five most frequent keywords across the compared pages.
    pub common_keywords: Vec<String>,
    pub source_reliability: ReliabilityMap,
    pub verdict: String,
}
