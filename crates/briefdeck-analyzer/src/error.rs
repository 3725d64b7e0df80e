//! Error types for the analysis orchestrator

use briefdeck_domain::InferenceError;
use thiserror::Error;

/// Errors that can occur while analyzing a brief
#[derive(Error, Debug)]
pub enum AnalyzeError {
    /// The brief text was empty or whitespace-only
    #[error("The brief is empty; nothing to analyze")]
    EmptyBrief,

    /// The brief exceeds the configured maximum length
    #[error("Brief too long: {0} chars (max: {1})")]
    BriefTooLong(usize, usize),

    /// The chat provider failed
    #[error(transparent)]
    Inference(#[from] InferenceError),
}

impl AnalyzeError {
    /// True when the failure is the unreachable-endpoint case, which the
    /// surfaces report with remediation guidance.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, AnalyzeError::Inference(e) if e.is_unavailable())
    }
}
