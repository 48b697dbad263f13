//! Credibility scoring: weighted aggregation of verification signals.
//!
//! The scorer is a pure function over its inputs. It never performs I/O,
//! never panics, and never returns an error to the caller: inputs that
//! cannot be scored produce `0.0`, which reads as "could not establish
//! credibility".

pub mod scorer;
pub mod types;

#[cfg(test)]
mod tests;

pub use scorer::{CredibilityScorer, VERIFICATION_THRESHOLD};
pub use types::{
    Assessment, CredibilityFactors, CredibilitySignals, CredibilityWeights, InvalidWeights,
    MisinformationIndicators, MisinformationReport, RiskRecommendation, SourceCredibility,
};
