//! Bounded in-memory log of verification outcomes.
//!
//! Backs the history endpoint. Recording never fails and never blocks a
//! verification: the log is a fixed-capacity ring that drops its oldest
//! entry on overflow.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::Serialize;
use uuid::Uuid;

use crate::verify::VerificationResult;

#[cfg(test)]
mod tests;

/// One recorded verification.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub id: Uuid,
    pub query: String,
    /// blake3 of the query, for correlating repeats without string compares.
    pub query_hash: String,
    pub credibility_score: f32,
    pub verified_sources: usize,
    pub is_verified: bool,
    pub is_original: bool,
    pub timestamp: DateTime<Utc>,
}

/// Fixed-capacity verification log, newest entries last.
#[derive(Debug)]
pub struct VerificationLog {
    entries: Mutex<VecDeque<LogEntry>>,
    capacity: usize,
}

impl VerificationLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(VecDeque::with_capacity(capacity.min(1024))),
            capacity: capacity.max(1),
        }
    }

    /// Records a verification outcome, evicting the oldest entry when full.
    pub fn record(&self, query: &str, result: &VerificationResult) -> Uuid {
        let entry = LogEntry {
            id: Uuid::new_v4(),
            query: query.to_string(),
            query_hash: blake3::hash(query.as_bytes()).to_hex().to_string(),
            credibility_score: result.credibility_score,
            verified_sources: result.verified_sources,
            is_verified: result.is_verified,
            is_original: result.is_original,
            timestamp: Utc::now(),
        };
        let id = entry.id;

        let mut entries = self.entries.lock();
        if entries.len() == self.capacity {
            entries.pop_front();
        }
        entries.push_back(entry);

        id
    }

    /// The most recent entries, newest first, at most `limit`.
    pub fn recent(&self, limit: usize) -> Vec<LogEntry> {
        let entries = self.entries.lock();
        entries.iter().rev().take(limit).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}
