//! Generation gateway port
//!
//! Defines the interface for producing one participant's utterance via
//! an external text-generation service. Adapters live in the
//! infrastructure layer and must normalize provider-specific failures
//! into the fixed [`GenerationError`] taxonomy; the engine never sees a
//! provider's raw error shape.

use async_trait::async_trait;
use roundtable_domain::{GenerationRequest, Role};
use thiserror::Error;

/// Normalized generation failure taxonomy
///
/// The transient classes are eligible for retry; the fatal classes fail
/// a turn on first occurrence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("rate limited by provider")]
    RateLimited,

    #[error("generation timed out")]
    Timeout,

    #[error("provider server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    #[error("invalid credentials")]
    InvalidAuth,

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl GenerationError {
    /// Whether this error class is worth retrying
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            GenerationError::RateLimited
                | GenerationError::Timeout
                | GenerationError::ServerError { .. }
        )
    }

    /// Short class label for user-facing failure reports
    pub fn class(&self) -> &'static str {
        match self {
            GenerationError::RateLimited => "rate-limited",
            GenerationError::Timeout => "timeout",
            GenerationError::ServerError { .. } => "server-error",
            GenerationError::InvalidAuth => "invalid-auth",
            GenerationError::InvalidRequest(_) => "invalid-request",
        }
    }
}

/// Gateway for text generation
///
/// One call produces one utterance for one role. Which provider/model
/// serves a role is fixed at configuration time by the adapter.
#[async_trait]
pub trait GenerationGateway: Send + Sync {
    async fn generate(
        &self,
        role: Role,
        request: &GenerationRequest,
    ) -> Result<String, GenerationError>;
}
