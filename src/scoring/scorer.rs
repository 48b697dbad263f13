use tracing::debug;

use crate::reliability::ReliabilityMap;
use crate::text::TextAnalyzer;

use super::types::{
    Assessment, CredibilityFactors, CredibilitySignals, CredibilityWeights, InvalidWeights,
    MisinformationIndicators, MisinformationReport, RiskRecommendation, SourceCredibility,
};

/// Minimum credibility score for a story to count as verified.
pub const VERIFICATION_THRESHOLD: f32 = 0.6;

/// Boost per additional independent source beyond the first.
const PER_SOURCE_BOOST: f32 = 0.1;

/// Fallback per-source weight when no reliability data is available.
const UNKNOWN_SOURCE_WEIGHT: f32 = 0.2;

const SPREAD_HEALTHY_SCORE: f32 = 0.8;
const SPREAD_UNHEALTHY_SCORE: f32 = 0.3;
const ORIGINAL_SCORE: f32 = 0.7;
const DERIVATIVE_SCORE: f32 = 0.5;

/// Sentiment magnitude above which content counts as extreme.
const EXTREME_SENTIMENT_THRESHOLD: f32 = 0.8;

/// Article count at which the frequency factor saturates.
const ARTICLE_FREQUENCY_BASELINE: f32 = 100.0;

/// Attribution phrases whose absence flags the missing-sources indicator.
const ATTRIBUTION_PHRASES: &[&str] = &["according to", "sources say"];

/// Weighted aggregation of credibility signals.
///
/// Construction validates the weight table; scoring itself is infallible.
#[derive(Debug, Clone, Copy)]
pub struct CredibilityScorer {
    weights: CredibilityWeights,
    analyzer: TextAnalyzer,
}

impl CredibilityScorer {
    /// Scorer with the default weight table
    /// (reliability 0.4, consistency 0.3, spread 0.2, originality 0.1).
    pub fn new() -> Self {
        Self {
            weights: CredibilityWeights::default(),
            analyzer: TextAnalyzer::new(),
        }
    }

    /// Scorer with a custom weight table; weights must sum to 1.0.
    pub fn with_weights(weights: CredibilityWeights) -> Result<Self, InvalidWeights> {
        weights.validate()?;
        Ok(Self {
            weights,
            analyzer: TextAnalyzer::new(),
        })
    }

    pub fn weights(&self) -> &CredibilityWeights {
        &self.weights
    }

    /// Resolves raw inputs into the four per-signal scores.
    ///
    /// Non-finite reliability entries are ignored rather than poisoning
    /// the mean (the resolver already bounds known-source values).
    pub fn resolve_signals(
        &self,
        num_sources: usize,
        reliability: &ReliabilityMap,
        content_consistency: f32,
        spread_pattern: bool,
        original_reporting: bool,
    ) -> CredibilitySignals {
        let trusted: Vec<f32> = reliability
            .values()
            .copied()
            .filter(|v| v.is_finite())
            .collect();

        let source_reliability = if !trusted.is_empty() {
            let mean = trusted.iter().sum::<f32>() / trusted.len() as f32;
            let boost = num_sources.saturating_sub(1) as f32 * PER_SOURCE_BOOST;
            (mean + boost).min(1.0)
        } else if num_sources < 2 {
            0.0
        } else {
            (num_sources as f32 * UNKNOWN_SOURCE_WEIGHT).min(1.0)
        };

        CredibilitySignals {
            source_reliability,
            content_consistency,
            spread_pattern,
            original_reporting,
        }
    }

    /// Weighted aggregate of resolved signals, clamped to `[0.0, 1.0]`.
    ///
    /// A non-finite intermediate (e.g. NaN consistency smuggled in by a
    /// caller) yields `0.0` instead of propagating.
    pub fn score_signals(&self, signals: &CredibilitySignals) -> f32 {
        let spread_score = if signals.spread_pattern {
            SPREAD_HEALTHY_SCORE
        } else {
            SPREAD_UNHEALTHY_SCORE
        };
        let original_score = if signals.original_reporting {
            ORIGINAL_SCORE
        } else {
            DERIVATIVE_SCORE
        };

        let total = signals.source_reliability * self.weights.source_reliability
            + signals.content_consistency * self.weights.content_consistency
            + spread_score * self.weights.spread_pattern
            + original_score * self.weights.original_reporting;

        if !total.is_finite() {
            debug!("non-finite credibility total, scoring as 0.0");
            return 0.0;
        }

        total.clamp(0.0, 1.0)
    }

    /// One-shot scoring from raw inputs.
    pub fn calculate_score(
        &self,
        num_sources: usize,
        reliability: &ReliabilityMap,
        content_consistency: f32,
        spread_pattern: bool,
        original_reporting: bool,
    ) -> f32 {
        let signals = self.resolve_signals(
            num_sources,
            reliability,
            content_consistency,
            spread_pattern,
            original_reporting,
        );
        self.score_signals(&signals)
    }

    /// Credibility profile for a single source from its publication stats.
    ///
    /// Factors are combined by unweighted mean and mapped onto fixed
    /// assessment tiers.
    pub fn analyze_source_credibility(
        &self,
        source: &str,
        article_count: usize,
        verification_rate: f32,
    ) -> SourceCredibility {
        let factors = CredibilityFactors {
            article_frequency: (article_count as f32 / ARTICLE_FREQUENCY_BASELINE).min(1.0),
            verification_rate: verification_rate.clamp(0.0, 1.0),
            consistency: 0.5,
        };

        let overall_score =
            (factors.article_frequency + factors.verification_rate + factors.consistency) / 3.0;

        SourceCredibility {
            source: source.to_string(),
            overall_score,
            factors,
            assessment: Assessment::from_score(overall_score),
        }
    }

    /// Misinformation indicators for one piece of content.
    ///
    /// `false_claims` is a documented extension point and always `false`;
    /// the remaining indicators reuse the text-analysis primitives so the
    /// semantics match the verification pipeline.
    pub fn detect_misinformation_indicators(
        &self,
        content: &str,
        sentiment_score: f32,
    ) -> MisinformationReport {
        let lower = content.to_lowercase();

        let indicators = MisinformationIndicators {
            sensational_language: self.analyzer.detect_sensationalism(content) > 0.0,
            extreme_sentiment: sentiment_score.abs() > EXTREME_SENTIMENT_THRESHOLD,
            missing_sources: !ATTRIBUTION_PHRASES.iter().any(|p| lower.contains(p)),
            false_claims: false,
        };

        let risk_level = indicators.risk_level();

        MisinformationReport {
            indicators,
            risk_level,
            recommendation: RiskRecommendation::from_risk_level(risk_level),
        }
    }
}

impl Default for CredibilityScorer {
    fn default() -> Self {
        Self::new()
    }
}
