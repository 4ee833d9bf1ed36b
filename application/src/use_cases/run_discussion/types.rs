//! Result and error types for the discussion use case

use crate::ports::generation::GenerationError;
use crate::ports::session_store::StoreError;
use roundtable_domain::{Abstention, Role, Round, Session, TranscriptError};
use thiserror::Error;

/// Errors that terminate a discussion
///
/// Every variant names enough context for the user to be told which
/// role and round failed and why, never just "something went wrong".
#[derive(Error, Debug)]
pub enum DiscussionError {
    /// A load-bearing turn failed after the retry policy was exhausted
    /// (or immediately, for fatal error classes)
    #[error("{role} failed during the {round} round ({class}): {source}", class = .source.class())]
    RoleFailed {
        role: Role,
        round: Round,
        #[source]
        source: GenerationError,
    },

    /// Every panelist abstained in a round that needs at least one voice
    #[error("all panelists abstained during the {0} round")]
    AllPanelistsAbstained(Round),

    /// Cooperative interruption observed at a turn boundary
    #[error("discussion cancelled")]
    Cancelled,

    /// Transcript invariant breach; a bug in the engine, not a runtime
    /// condition
    #[error("transcript invariant violated: {0}")]
    Transcript(#[from] TranscriptError),
}

/// Outcome of a completed discussion
#[derive(Debug)]
pub struct DiscussionReport {
    /// The finished session snapshot, consensus included
    pub session: Session,
    /// Store identifier, when persistence succeeded
    pub saved_as: Option<String>,
    /// The save failure, when persistence did not succeed; the session
    /// itself is still in hand
    pub storage_error: Option<StoreError>,
    /// Panelist absences recorded along the way
    pub abstentions: Vec<Abstention>,
}

impl DiscussionReport {
    /// Whether the finished session reached durable storage
    pub fn is_persisted(&self) -> bool {
        self.saved_as.is_some()
    }
}
