//! Mutable discussion aggregate

use super::consensus::ConsensusArtifact;
use super::message::Message;
use super::role::Role;
use super::round::Round;
use super::transcript::{Transcript, TranscriptError};
use crate::core::topic::Topic;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a discussion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscussionStatus {
    NotStarted,
    InProgress,
    Completed,
    Aborted,
}

impl DiscussionStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, DiscussionStatus::Completed | DiscussionStatus::Aborted)
    }
}

impl std::fmt::Display for DiscussionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            DiscussionStatus::NotStarted => "not started",
            DiscussionStatus::InProgress => "in progress",
            DiscussionStatus::Completed => "completed",
            DiscussionStatus::Aborted => "aborted",
        };
        write!(f, "{s}")
    }
}

/// A panelist's non-fatal absence from a round
///
/// Recorded when a panelist's generation exhausted its retries. An
/// abstention is not an error and produces no placeholder message:
/// downstream rounds simply see no statement from that participant for
/// that round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Abstention {
    pub role: Role,
    pub round: Round,
}

/// Mutable aggregate owned by the session lifecycle for one discussion
///
/// Exactly one component mutates this at a time; it is handed around by
/// value or exclusive reference, never shared. Transitions to Completed
/// only once a consensus artifact exists.
#[derive(Debug, Clone)]
pub struct DiscussionState {
    topic: Topic,
    current_round: Round,
    transcript: Transcript,
    status: DiscussionStatus,
    abstentions: Vec<Abstention>,
    consensus: Option<ConsensusArtifact>,
}

impl DiscussionState {
    pub fn new(topic: Topic) -> Self {
        Self {
            topic,
            current_round: Round::Framing,
            transcript: Transcript::new(),
            status: DiscussionStatus::NotStarted,
            abstentions: Vec::new(),
            consensus: None,
        }
    }

    pub fn topic(&self) -> &Topic {
        &self.topic
    }

    pub fn current_round(&self) -> Round {
        self.current_round
    }

    pub fn status(&self) -> DiscussionStatus {
        self.status
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn abstentions(&self) -> &[Abstention] {
        &self.abstentions
    }

    pub fn consensus(&self) -> Option<&ConsensusArtifact> {
        self.consensus.as_ref()
    }

    /// Mark the discussion as running
    pub fn begin(&mut self) {
        self.status = DiscussionStatus::InProgress;
    }

    /// Record an utterance, assigning it the next sequence index
    pub fn record(
        &mut self,
        role: Role,
        content: impl Into<String>,
    ) -> Result<&Message, TranscriptError> {
        let seq = self.transcript.next_seq();
        let message = Message::new(role, self.current_round, content, seq);
        self.transcript.append(message)?;
        // append succeeded, so the slot exists
        Ok(&self.transcript.messages()[seq as usize])
    }

    /// Record a panelist's absence from the current round
    pub fn record_abstention(&mut self, role: Role) {
        self.abstentions.push(Abstention {
            role,
            round: self.current_round,
        });
    }

    /// Panelists that abstained in the given round
    pub fn abstained_in(&self, round: Round) -> Vec<Role> {
        self.abstentions
            .iter()
            .filter(|a| a.round == round)
            .map(|a| a.role)
            .collect()
    }

    /// Advance to the next round; returns the new round, or None at the end
    pub fn advance_round(&mut self) -> Option<Round> {
        let next = self.current_round.next()?;
        self.current_round = next;
        Some(next)
    }

    /// Finish the discussion with its consensus artifact
    pub fn complete(&mut self, artifact: ConsensusArtifact) {
        self.consensus = Some(artifact);
        self.status = DiscussionStatus::Completed;
    }

    /// Terminate the discussion without a consensus
    pub fn abort(&mut self) {
        self.status = DiscussionStatus::Aborted;
    }
}
