//! Session - the persisted record of one discussion

use crate::discussion::consensus::ConsensusArtifact;
use crate::discussion::message::Message;
use crate::discussion::state::{DiscussionState, DiscussionStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The persisted unit: a full-transcript snapshot of one discussion
///
/// Created only at the end of a discussion (complete or aborted), or
/// reconstructed from storage for replay. The engine holds no live
/// reference after persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub topic: String,
    pub created_at: DateTime<Utc>,
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consensus: Option<ConsensusArtifact>,
    pub status: DiscussionStatus,
}

impl Session {
    /// Snapshot a terminal discussion state into a persistable session
    pub fn snapshot(id: impl Into<String>, state: &DiscussionState) -> Self {
        Self {
            id: id.into(),
            topic: state.topic().content().to_string(),
            created_at: Utc::now(),
            messages: state.transcript().messages().to_vec(),
            consensus: state.consensus().cloned(),
            status: state.status(),
        }
    }

    /// Whether the discussion behind this session reached a consensus
    pub fn is_completed(&self) -> bool {
        self.status == DiscussionStatus::Completed && self.consensus.is_some()
    }

    /// Summary view for listings
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            id: self.id.clone(),
            topic: self.topic.clone(),
            created_at: self.created_at,
            status: self.status,
        }
    }
}

/// Lightweight listing entry for a stored session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub id: String,
    pub topic: String,
    pub created_at: DateTime<Utc>,
    pub status: DiscussionStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::topic::Topic;
    use crate::discussion::role::Role;

    #[test]
    fn test_snapshot_captures_state() {
        let mut state = DiscussionState::new(Topic::new("Is X true?"));
        state.begin();
        state.record(Role::Moderator, "Framing").unwrap();
        state.complete(ConsensusArtifact::new("We agree."));

        let session = Session::snapshot("sess-1", &state);
        assert_eq!(session.topic, "Is X true?");
        assert_eq!(session.messages.len(), 1);
        assert!(session.is_completed());
    }

    #[test]
    fn test_aborted_snapshot_is_not_completed() {
        let mut state = DiscussionState::new(Topic::new("Is X true?"));
        state.begin();
        state.abort();

        let session = Session::snapshot("sess-2", &state);
        assert!(!session.is_completed());
        assert_eq!(session.status, DiscussionStatus::Aborted);
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut state = DiscussionState::new(Topic::new("Is X true?"));
        state.begin();
        state.record(Role::Moderator, "Framing").unwrap();
        state.complete(ConsensusArtifact::new("Done."));

        let session = Session::snapshot("sess-3", &state);
        let json = serde_json::to_string(&session).unwrap();
        let back: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(session, back);
    }

    #[test]
    fn test_summary_projection() {
        let mut state = DiscussionState::new(Topic::new("Is X true?"));
        state.begin();
        state.complete(ConsensusArtifact::new("Done."));

        let session = Session::snapshot("sess-4", &state);
        let summary = session.summary();
        assert_eq!(summary.id, "sess-4");
        assert_eq!(summary.status, DiscussionStatus::Completed);
    }
}
