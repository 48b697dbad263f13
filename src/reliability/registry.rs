use std::collections::HashMap;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

/// One registry entry, as served by the trusted-sources listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrustedSource {
    pub source: String,
    pub trust_score: f32,
}

/// Errors from trust registry lookups and loading.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("failed to read registry file '{path}': {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse registry file '{path}': {source}")]
    ParseFailed {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("registry lookup failed for '{source_name}': {message}")]
    LookupFailed {
        source_name: String,
        message: String,
    },
}

/// Read-only lookup of a source's persisted trust score.
pub trait TrustRegistry: Send + Sync {
    /// Returns the trust score for `source_name`, or `None` on a miss.
    fn lookup(
        &self,
        source_name: &str,
    ) -> impl std::future::Future<Output = Result<Option<f32>, RegistryError>> + Send;

    /// Every registry entry, sorted by source name.
    fn entries(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<TrustedSource>, RegistryError>> + Send;
}

fn sorted_entries(scores: &HashMap<String, f32>) -> Vec<TrustedSource> {
    let mut entries: Vec<TrustedSource> = scores
        .iter()
        .map(|(source, score)| TrustedSource {
            source: source.clone(),
            trust_score: *score,
        })
        .collect();
    entries.sort_by(|a, b| a.source.cmp(&b.source));
    entries
}

/// Trust registry backed by a JSON file (`{"source name": score}`).
///
/// The file is read once at startup; the resulting map is immutable, so
/// the registry is safe to share across concurrent lookups.
#[derive(Debug, Clone, Default)]
pub struct FileTrustRegistry {
    scores: HashMap<String, f32>,
}

impl FileTrustRegistry {
    /// Empty registry: every lookup is a miss.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Loads the registry from a JSON map file.
    pub fn from_file(path: &Path) -> Result<Self, RegistryError> {
        let display = path.display().to_string();
        let raw = std::fs::read_to_string(path).map_err(|e| RegistryError::ReadFailed {
            path: display.clone(),
            source: e,
        })?;

        let scores: HashMap<String, f32> =
            serde_json::from_str(&raw).map_err(|e| RegistryError::ParseFailed {
                path: display,
                source: e,
            })?;

        Ok(Self { scores })
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl TrustRegistry for FileTrustRegistry {
    async fn lookup(&self, source_name: &str) -> Result<Option<f32>, RegistryError> {
        Ok(self.scores.get(source_name).copied())
    }

    async fn entries(&self) -> Result<Vec<TrustedSource>, RegistryError> {
        Ok(sorted_entries(&self.scores))
    }
}

/// In-memory registry for tests, with optional failure injection.
#[cfg(any(test, feature = "mock"))]
#[derive(Debug, Clone, Default)]
pub struct StaticTrustRegistry {
    scores: HashMap<String, f32>,
    failing: bool,
}

#[cfg(any(test, feature = "mock"))]
impl StaticTrustRegistry {
    pub fn new(scores: impl IntoIterator<Item = (impl Into<String>, f32)>) -> Self {
        Self {
            scores: scores.into_iter().map(|(k, v)| (k.into(), v)).collect(),
            failing: false,
        }
    }

    /// Registry whose every lookup returns an error.
    pub fn failing() -> Self {
        Self {
            scores: HashMap::new(),
            failing: true,
        }
    }
}

#[cfg(any(test, feature = "mock"))]
impl TrustRegistry for StaticTrustRegistry {
    async fn lookup(&self, source_name: &str) -> Result<Option<f32>, RegistryError> {
        if self.failing {
            return Err(RegistryError::LookupFailed {
                source_name: source_name.to_string(),
                message: "injected failure".to_string(),
            });
        }
        Ok(self.scores.get(source_name).copied())
    }

    async fn entries(&self) -> Result<Vec<TrustedSource>, RegistryError> {
        if self.failing {
            return Err(RegistryError::LookupFailed {
                source_name: "*".to_string(),
                message: "injected failure".to_string(),
            });
        }
        Ok(sorted_entries(&self.scores))
    }
}
