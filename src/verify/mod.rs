//! Verification orchestration.
//!
//! [`VerificationService`] drives a single query end to end: candidate
//! gathering (repository lookup plus an optional live page fetch), signal
//! computation over the candidate set, weighted scoring, and the final
//! verdict. Each call is a one-shot computation with no state carried
//! between requests.

pub mod error;
pub mod service;
pub mod types;


pub use error::VerifyError;
pub use service::VerificationService;
pub use types::{
    ComparisonResult, CredibilityProfile, VerificationDepth, VerificationResult,
};
