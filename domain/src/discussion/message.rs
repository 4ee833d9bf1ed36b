//! Message value object - a single utterance in a discussion

use super::role::Role;
use super::round::Round;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single utterance in a discussion transcript
///
/// Immutable once created. Sequence numbers are assigned by the
/// transcript the message is appended to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// The role that produced this utterance
    pub role: Role,
    /// The round during which it was produced
    pub round: Round,
    /// The utterance text
    pub content: String,
    /// Position within the transcript, starting at 0
    pub seq: u64,
    /// When the utterance was produced
    #[serde(rename = "ts")]
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Create a new message stamped with the current time
    pub fn new(role: Role, round: Round, content: impl Into<String>, seq: u64) -> Self {
        Self {
            role,
            round,
            content: content.into(),
            seq,
            timestamp: Utc::now(),
        }
    }

    /// Check if this message was authored by the moderator
    pub fn is_moderator(&self) -> bool {
        self.role.is_moderator()
    }
}
