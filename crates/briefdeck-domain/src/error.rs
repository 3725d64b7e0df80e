//! Typed inference failures
//!
//! The boundary is a tagged error so callers match on the failure kind
//! instead of sniffing substrings out of a message string.

use thiserror::Error;

/// Errors produced by a chat provider.
#[derive(Debug, Error)]
pub enum InferenceError {
    /// The inference endpoint did not answer the reachability probe
    #[error("inference endpoint is not reachable: {hint}")]
    ServiceUnavailable {
        /// User-facing remediation guidance
        hint: String,
    },

    /// The call reached the endpoint but failed (transport or HTTP error)
    #[error("inference request failed: {0}")]
    RequestFailed(String),

    /// The endpoint answered with something we could not interpret
    #[error("invalid response from model: {0}")]
    InvalidResponse(String),
}

impl InferenceError {
    /// True for the unreachable-endpoint case, which callers report with
    /// remediation guidance rather than as a request fault.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, InferenceError::ServiceUnavailable { .. })
    }
}
