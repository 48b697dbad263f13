//! Source trust resolution.
//!
//! The trust registry is an external collaborator; this module defines the
//! seam ([`TrustRegistry`]), a file-backed implementation, and the
//! [`SourceReliabilityResolver`] that turns a set of source names into a
//! [`ReliabilityMap`]. Resolution never fails the pipeline: a miss or a
//! registry error degrades that one source to the neutral default.

pub mod registry;


pub use registry::{FileTrustRegistry, RegistryError, TrustRegistry, TrustedSource};
#[cfg(any(test, feature = "mock"))]
pub use registry::StaticTrustRegistry;

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use tracing::warn;

/// Source name to trust score in `[0.0, 1.0]`.
pub type ReliabilityMap = HashMap<String, f32>;

/// Neutral trust score for sources unknown to the registry.
pub const DEFAULT_TRUST_SCORE: f32 = 0.5;

/// Resolves source names to trust scores via a shared [`TrustRegistry`].
#[derive(Debug, Clone)]
pub struct SourceReliabilityResolver<T: TrustRegistry> {
    registry: Arc<T>,
}

impl<T: TrustRegistry> SourceReliabilityResolver<T> {
    pub fn new(registry: Arc<T>) -> Self {
        Self { registry }
    }

    /// Looks up every source by exact name.
    ///
    /// Unknown sources and per-source lookup failures map to
    /// [`DEFAULT_TRUST_SCORE`]; known scores are clamped into `[0.0, 1.0]`.
    pub async fn resolve(&self, sources: &BTreeSet<String>) -> ReliabilityMap {
        let mut reliability = ReliabilityMap::with_capacity(sources.len());

        for source in sources {
            let score = match self.registry.lookup(source).await {
                Ok(Some(score)) => score.clamp(0.0, 1.0),
                Ok(None) => DEFAULT_TRUST_SCORE,
                Err(e) => {
                    warn!(source = %source, error = %e, "registry lookup failed, using neutral trust");
                    DEFAULT_TRUST_SCORE
                }
            };
            reliability.insert(source.clone(), score);
        }

        reliability
    }
}
