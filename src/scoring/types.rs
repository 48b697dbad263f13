use serde::Serialize;
use thiserror::Error;

/// Tolerance when checking that weights sum to 1.0.
const WEIGHT_SUM_TOLERANCE: f32 = 1e-4;

/// Weights for the four credibility signals.
///
/// An explicit configuration value passed into
/// [`CredibilityScorer::with_weights`](super::CredibilityScorer::with_weights)
/// so differently-weighted scorers can coexist. Must sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CredibilityWeights {
    pub source_reliability: f32,
    pub content_consistency: f32,
    pub spread_pattern: f32,
    pub original_reporting: f32,
}

impl Default for CredibilityWeights {
    fn default() -> Self {
        Self {
            source_reliability: 0.4,
            content_consistency: 0.3,
            spread_pattern: 0.2,
            original_reporting: 0.1,
        }
    }
}

impl CredibilityWeights {
    pub fn sum(&self) -> f32 {
        self.source_reliability
            + self.content_consistency
            + self.spread_pattern
            + self.original_reporting
    }

    /// Checks the sum-to-one invariant.
    pub fn validate(&self) -> Result<(), InvalidWeights> {
        let sum = self.sum();
        if !sum.is_finite() || (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(InvalidWeights { sum });
        }
        Ok(())
    }
}

/// Weight table does not sum to 1.0.
#[derive(Debug, Error)]
#[error("credibility weights must sum to 1.0, got {sum}")]
pub struct InvalidWeights {
    pub sum: f32,
}

/// Resolved per-signal scores fed into the weighted aggregation, kept on
/// the verification result for auditability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Default)]
pub struct CredibilitySignals {
    /// Source-reliability signal in `[0.0, 1.0]` (mean registry trust,
    /// boosted per additional independent source).
    pub source_reliability: f32,
    /// Cross-candidate content consistency in `[0.0, 1.0]`.
    pub content_consistency: f32,
    /// Whether the story is reported by more than one candidate.
    pub spread_pattern: bool,
    /// Whether any original reporting is present (placeholder heuristic).
    pub original_reporting: bool,
}

/// Textual assessment tiers for a source credibility profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Assessment {
    #[serde(rename = "Highly credible")]
    HighlyCredible,
    #[serde(rename = "Credible")]
    Credible,
    #[serde(rename = "Moderately credible")]
    ModeratelyCredible,
    #[serde(rename = "Low credibility")]
    LowCredibility,
}

impl Assessment {
    /// Maps an overall score to its tier via fixed thresholds.
    pub fn from_score(score: f32) -> Self {
        if score >= 0.8 {
            Assessment::HighlyCredible
        } else if score >= 0.6 {
            Assessment::Credible
        } else if score >= 0.4 {
            Assessment::ModeratelyCredible
        } else {
            Assessment::LowCredibility
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Assessment::HighlyCredible => "Highly credible",
            Assessment::Credible => "Credible",
            Assessment::ModeratelyCredible => "Moderately credible",
            Assessment::LowCredibility => "Low credibility",
        }
    }
}

impl std::fmt::Display for Assessment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Independently computed factors behind a source credibility profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CredibilityFactors {
    /// Publication volume normalized against a 100-article baseline.
    pub article_frequency: f32,
    /// Fraction of this source's articles that verified, in `[0.0, 1.0]`.
    pub verification_rate: f32,
    /// Reporting consistency placeholder (neutral 0.5 until a real
    /// cross-article comparison backs it).
    pub consistency: f32,
}

/// Credibility profile for a single source.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceCredibility {
    pub source: String,
    pub overall_score: f32,
    pub factors: CredibilityFactors,
    pub assessment: Assessment,
}

/// Boolean misinformation indicators, each independently computable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MisinformationIndicators {
    pub sensational_language: bool,
    pub extreme_sentiment: bool,
    pub missing_sources: bool,
    /// Always `false`: external fact-checking is out of scope.
    pub false_claims: bool,
}

impl MisinformationIndicators {
    /// Fraction of indicators that fired.
    pub fn risk_level(&self) -> f32 {
        let fired = [
            self.sensational_language,
            self.extreme_sentiment,
            self.missing_sources,
            self.false_claims,
        ]
        .iter()
        .filter(|&&v| v)
        .count();

        fired as f32 / 4.0
    }
}

/// Ordered risk tiers for misinformation indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskRecommendation {
    #[serde(rename = "High risk - Do not publish")]
    High,
    #[serde(rename = "Medium risk - Requires further verification")]
    Medium,
    #[serde(rename = "Low risk - Can be published")]
    Low,
}

impl RiskRecommendation {
    pub fn from_risk_level(risk_level: f32) -> Self {
        if risk_level >= 0.7 {
            RiskRecommendation::High
        } else if risk_level >= 0.4 {
            RiskRecommendation::Medium
        } else {
            RiskRecommendation::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskRecommendation::High => "High risk - Do not publish",
            RiskRecommendation::Medium => "Medium risk - Requires further verification",
            RiskRecommendation::Low => "Low risk - Can be published",
        }
    }
}

impl std::fmt::Display for RiskRecommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Misinformation analysis of one piece of content.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MisinformationReport {
    pub indicators: MisinformationIndicators,
    pub risk_level: f32,
    pub recommendation: RiskRecommendation,
}
