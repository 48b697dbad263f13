use crate::verify::{VerificationDepth, VerificationResult};

use super::VerificationLog;

fn result(score: f32, verified: bool) -> VerificationResult {
    VerificationResult {
        is_verified: verified,
        credibility_score: score,
        verified_sources: if verified { 2 } else { 0 },
        is_original: true,
        status: if verified { "Verified" } else { "Unverified" }.to_string(),
        sources: Default::default(),
        keywords: Vec::new(),
        details: Default::default(),
        depth: VerificationDepth::Standard,
    }
}

#[test]
fn records_and_returns_newest_first() {
    let log = VerificationLog::new(10);
    log.record("first query", &result(0.2, false));
    log.record("second query", &result(0.9, true));

    let recent = log.recent(10);
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].query, "second query");
    assert!(recent[0].is_verified);
    assert_eq!(recent[1].query, "first query");
}

#[test]
fn capacity_evicts_oldest() {
    let log = VerificationLog::new(3);
    for i in 0..5 {
        log.record(&format!("query {i}"), &result(0.5, false));
    }

    assert_eq!(log.len(), 3);
    let recent = log.recent(10);
    assert_eq!(recent[0].query, "query 4");
    assert_eq!(recent[2].query, "query 2");
}

#[test]
fn recent_respects_limit() {
    let log = VerificationLog::new(10);
    for i in 0..6 {
        log.record(&format!("query {i}"), &result(0.5, false));
    }

    assert_eq!(log.recent(2).len(), 2);
}

#[test]
fn identical_queries_share_a_hash_but_not_an_id() {
    let log = VerificationLog::new(10);
    let first = log.record("same query", &result(0.5, false));
    let second = log.record("same query", &result(0.5, false));
    assert_ne!(first, second);

    let recent = log.recent(2);
    assert_eq!(recent[0].query_hash, recent[1].query_hash);
    assert_eq!(recent[0].query_hash.len(), 64);
}

#[test]
fn zero_capacity_still_holds_one_entry() {
    let log = VerificationLog::new(0);
    log.record("query", &result(0.5, false));
    log.record("newer query", &result(0.5, false));

    assert_eq!(log.len(), 1);
    assert_eq!(log.recent(5)[0].query, "newer query");
}
