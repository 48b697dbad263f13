use super::*;
use crate::reliability::ReliabilityMap;

fn reliability_of(pairs: &[(&str, f32)]) -> ReliabilityMap {
    pairs
        .iter()
        .map(|(name, score)| (name.to_string(), *score))
        .collect()
}

#[test]
fn test_default_weights_sum_to_one() {
    let weights = CredibilityWeights::default();
    assert!((weights.sum() - 1.0).abs() < 1e-6);
    assert!(weights.validate().is_ok());
}

#[test]
fn test_with_weights_rejects_unnormalized_table() {
    let weights = CredibilityWeights {
        source_reliability: 0.5,
        content_consistency: 0.5,
        spread_pattern: 0.5,
        original_reporting: 0.5,
    };
    assert!(CredibilityScorer::with_weights(weights).is_err());
}

#[test]
fn test_with_weights_accepts_reconfigured_table() {
    let weights = CredibilityWeights {
        source_reliability: 0.25,
        content_consistency: 0.25,
        spread_pattern: 0.25,
        original_reporting: 0.25,
    };
    let scorer = CredibilityScorer::with_weights(weights).expect("normalized");
    assert_eq!(scorer.weights().source_reliability, 0.25);
}

#[test]
fn test_two_trusted_sources_scenario() {
    // reliability {A:0.9, B:0.9}, 2 sources, consistency 0.9, spread, original
    // => source = min(0.9 + 0.1, 1.0) = 1.0
    // => 1.0*0.4 + 0.9*0.3 + 0.8*0.2 + 0.7*0.1 = 0.90
    let scorer = CredibilityScorer::new();
    let reliability = reliability_of(&[("A", 0.9), ("B", 0.9)]);

    let signals = scorer.resolve_signals(2, &reliability, 0.9, true, true);
    assert!((signals.source_reliability - 1.0).abs() < 1e-6);

    let score = scorer.score_signals(&signals);
    assert!((score - 0.90).abs() < 1e-5, "score was {score}");
    assert!(score >= VERIFICATION_THRESHOLD);
}

#[test]
fn test_empty_reliability_map_fallbacks() {
    let scorer = CredibilityScorer::new();
    let empty = ReliabilityMap::new();

    // Fewer than two sources with no reliability data scores zero.
    let single = scorer.resolve_signals(1, &empty, 0.5, false, false);
    assert_eq!(single.source_reliability, 0.0);

    // Otherwise 0.2 per source, capped at 1.0.
    let three = scorer.resolve_signals(3, &empty, 0.5, true, true);
    assert!((three.source_reliability - 0.6).abs() < 1e-6);

    let many = scorer.resolve_signals(9, &empty, 0.5, true, true);
    assert_eq!(many.source_reliability, 1.0);
}

#[test]
fn test_source_boost_caps_at_one() {
    let scorer = CredibilityScorer::new();
    let reliability = reliability_of(&[("A", 0.8), ("B", 0.8), ("C", 0.8), ("D", 0.8)]);
    let signals = scorer.resolve_signals(4, &reliability, 0.5, true, true);
    assert_eq!(signals.source_reliability, 1.0);
}

#[test]
fn test_score_monotonic_in_consistency() {
    let scorer = CredibilityScorer::new();
    let reliability = reliability_of(&[("A", 0.7), ("B", 0.6)]);

    let mut previous = -1.0;
    for step in 0..=10 {
        let consistency = step as f32 / 10.0;
        let score = scorer.calculate_score(2, &reliability, consistency, true, true);
        assert!(
            score >= previous,
            "score decreased at consistency {consistency}"
        );
        previous = score;
    }
}

#[test]
fn test_score_bounded_for_adversarial_inputs() {
    let scorer = CredibilityScorer::new();

    let hostile_maps = [
        reliability_of(&[("A", 99.0), ("B", -50.0)]),
        reliability_of(&[("A", f32::INFINITY)]),
        reliability_of(&[("A", f32::NAN), ("B", 0.9)]),
        ReliabilityMap::new(),
    ];

    for map in &hostile_maps {
        for consistency in [-10.0, 0.0, 0.5, 1.0, 10.0, f32::NAN] {
            let score = scorer.calculate_score(5, map, consistency, true, true);
            assert!(
                (0.0..=1.0).contains(&score),
                "score {score} out of range for consistency {consistency}"
            );
        }
    }
}

#[test]
fn test_nan_consistency_scores_zero() {
    let scorer = CredibilityScorer::new();
    let reliability = reliability_of(&[("A", 0.9)]);
    assert_eq!(scorer.calculate_score(1, &reliability, f32::NAN, true, true), 0.0);
}

#[test]
fn test_spread_and_original_signal_values() {
    let scorer = CredibilityScorer::new();
    let reliability = reliability_of(&[("A", 0.5)]);

    let spread = scorer.calculate_score(1, &reliability, 0.5, true, false);
    let no_spread = scorer.calculate_score(1, &reliability, 0.5, false, false);
    // 0.8 vs 0.3 through the 0.2 weight.
    assert!((spread - no_spread - 0.1).abs() < 1e-6);

    let original = scorer.calculate_score(1, &reliability, 0.5, false, true);
    // 0.7 vs 0.5 through the 0.1 weight.
    assert!((original - no_spread - 0.02).abs() < 1e-6);
}

#[test]
fn test_source_credibility_profile() {
    let scorer = CredibilityScorer::new();

    let profile = scorer.analyze_source_credibility("Daily Planet", 50, 0.9);
    assert_eq!(profile.source, "Daily Planet");
    assert!((profile.factors.article_frequency - 0.5).abs() < 1e-6);
    // mean(0.5, 0.9, 0.5) = 0.6333 => Credible
    assert_eq!(profile.assessment, Assessment::Credible);

    let prolific = scorer.analyze_source_credibility("Wire", 1_000, 1.0);
    assert_eq!(prolific.factors.article_frequency, 1.0);
    assert_eq!(prolific.assessment, Assessment::HighlyCredible);

    let unknown = scorer.analyze_source_credibility("Blog", 0, 0.0);
    assert_eq!(unknown.assessment, Assessment::LowCredibility);
}

#[test]
fn test_assessment_tier_boundaries() {
    assert_eq!(Assessment::from_score(0.8), Assessment::HighlyCredible);
    assert_eq!(Assessment::from_score(0.79), Assessment::Credible);
    assert_eq!(Assessment::from_score(0.6), Assessment::Credible);
    assert_eq!(Assessment::from_score(0.4), Assessment::ModeratelyCredible);
    assert_eq!(Assessment::from_score(0.39), Assessment::LowCredibility);
}

#[test]
fn test_misinformation_indicators() {
    let scorer = CredibilityScorer::new();

    let sober = "According to the city engineer, the bridge inspection found no damage.";
    let report = scorer.detect_misinformation_indicators(sober, 0.1);
    assert!(!report.indicators.sensational_language);
    assert!(!report.indicators.extreme_sentiment);
    assert!(!report.indicators.missing_sources);
    assert!(!report.indicators.false_claims);
    assert_eq!(report.risk_level, 0.0);
    assert_eq!(report.recommendation, RiskRecommendation::Low);

    let lurid = "SHOCKING viral scandal rocks the city!!!";
    let report = scorer.detect_misinformation_indicators(lurid, -0.95);
    assert!(report.indicators.sensational_language);
    assert!(report.indicators.extreme_sentiment);
    assert!(report.indicators.missing_sources);
    assert!(!report.indicators.false_claims);
    assert!((report.risk_level - 0.75).abs() < 1e-6);
    assert_eq!(report.recommendation, RiskRecommendation::High);
}

#[test]
fn test_risk_tier_boundaries() {
    assert_eq!(RiskRecommendation::from_risk_level(0.7), RiskRecommendation::High);
    assert_eq!(RiskRecommendation::from_risk_level(0.5), RiskRecommendation::Medium);
    assert_eq!(RiskRecommendation::from_risk_level(0.4), RiskRecommendation::Medium);
    assert_eq!(RiskRecommendation::from_risk_level(0.25), RiskRecommendation::Low);
}
