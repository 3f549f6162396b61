//! Error types for the model-provider seam.
//!
//! Orchestration code propagates `anyhow::Error`; everything is absorbed at
//! the Court boundary and converted into a fallback verdict, so none of these
//! ever reach an external caller.

use thiserror::Error;

/// Failure classes a single model call can produce. All of them are treated
/// identically by the callers (the call failed, degrade), but the messages
/// surface inside fallback analysis text so an operator can tell them apart.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The service answered with a non-success status.
    #[error("model API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// The request never completed: connect, TLS, or timeout trouble.
    #[error("transport failure: {0}")]
    Transport(String),

    /// A 2xx reply that does not carry the expected content shape.
    #[error("malformed model reply: {0}")]
    MalformedReply(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        ProviderError::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_errors_carry_status_in_the_message() {
        let err = ProviderError::Api {
            status: 429,
            message: "slow down".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("429"));
        assert!(msg.contains("slow down"));
    }
}
