//! Append-only discussion transcript

use super::message::Message;
use super::round::Round;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by transcript mutation
///
/// An ordering violation is an invariant breach in the engine, never an
/// expected runtime condition; callers treat it as fatal.
#[derive(Error, Debug, PartialEq)]
pub enum TranscriptError {
    #[error("Ordering violation: expected seq {expected}, got {got}")]
    OrderingViolation { expected: u64, got: u64 },

    #[error("Ordering violation: round {got} after round {last}")]
    RoundRegression { last: Round, got: Round },
}

/// The ordered sequence of messages in one discussion
///
/// Append-only: messages are never mutated or removed. Two invariants
/// hold for every transcript:
///
/// - sequence indices are strictly increasing, one at a time
/// - round numbers are monotonically non-decreasing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a transcript from an already-validated message sequence
    ///
    /// Used when reconstructing a persisted session. Fails if the stored
    /// sequence violates the transcript invariants.
    pub fn from_messages(messages: Vec<Message>) -> Result<Self, TranscriptError> {
        let mut transcript = Self::new();
        for message in messages {
            transcript.append(message)?;
        }
        Ok(transcript)
    }

    /// Append a message, enforcing the ordering invariants
    pub fn append(&mut self, message: Message) -> Result<(), TranscriptError> {
        let expected = self.next_seq();
        if message.seq != expected {
            return Err(TranscriptError::OrderingViolation {
                expected,
                got: message.seq,
            });
        }
        if let Some(last) = self.messages.last()
            && message.round < last.round
        {
            return Err(TranscriptError::RoundRegression {
                last: last.round,
                got: message.round,
            });
        }
        self.messages.push(message);
        Ok(())
    }

    /// The sequence index the next appended message must carry
    pub fn next_seq(&self) -> u64 {
        self.messages.last().map_or(0, |m| m.seq + 1)
    }

    /// All messages in insertion order
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// All messages produced in a given round, in insertion order
    pub fn messages_in(&self, round: Round) -> impl Iterator<Item = &Message> {
        self.messages.iter().filter(move |m| m.round == round)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discussion::role::Role;

    fn msg(role: Role, round: Round, seq: u64) -> Message {
        Message::new(role, round, format!("{} speaks", role), seq)
    }

    #[test]
    fn test_append_in_order() {
        let mut t = Transcript::new();
        t.append(msg(Role::Moderator, Round::Framing, 0)).unwrap();
        t.append(msg(Role::PanelistA, Round::Evidence, 1)).unwrap();
        t.append(msg(Role::PanelistB, Round::Evidence, 2)).unwrap();
        assert_eq!(t.len(), 3);
        assert_eq!(t.next_seq(), 3);
    }

    #[test]
    fn test_seq_gap_rejected() {
        let mut t = Transcript::new();
        t.append(msg(Role::Moderator, Round::Framing, 0)).unwrap();
        let err = t.append(msg(Role::PanelistA, Round::Evidence, 2)).unwrap_err();
        assert_eq!(
            err,
            TranscriptError::OrderingViolation {
                expected: 1,
                got: 2
            }
        );
    }

    #[test]
    fn test_seq_repeat_rejected() {
        let mut t = Transcript::new();
        t.append(msg(Role::Moderator, Round::Framing, 0)).unwrap();
        assert!(t.append(msg(Role::PanelistA, Round::Evidence, 0)).is_err());
    }

    #[test]
    fn test_round_regression_rejected() {
        let mut t = Transcript::new();
        t.append(msg(Role::Moderator, Round::Framing, 0)).unwrap();
        t.append(msg(Role::PanelistA, Round::Evidence, 1)).unwrap();
        let err = t.append(msg(Role::Moderator, Round::Framing, 2)).unwrap_err();
        assert!(matches!(err, TranscriptError::RoundRegression { .. }));
    }

    #[test]
    fn test_same_round_allowed() {
        let mut t = Transcript::new();
        t.append(msg(Role::PanelistA, Round::Evidence, 0)).unwrap();
        t.append(msg(Role::PanelistB, Round::Evidence, 1)).unwrap();
        assert_eq!(t.messages_in(Round::Evidence).count(), 2);
    }

    #[test]
    fn test_messages_in_round_insertion_order() {
        let mut t = Transcript::new();
        t.append(msg(Role::Moderator, Round::Framing, 0)).unwrap();
        t.append(msg(Role::PanelistB, Round::Evidence, 1)).unwrap();
        t.append(msg(Role::PanelistA, Round::Evidence, 2)).unwrap();

        let roles: Vec<Role> = t.messages_in(Round::Evidence).map(|m| m.role).collect();
        assert_eq!(roles, vec![Role::PanelistB, Role::PanelistA]);
    }

    #[test]
    fn test_from_messages_validates() {
        let valid = vec![
            msg(Role::Moderator, Round::Framing, 0),
            msg(Role::PanelistA, Round::Evidence, 1),
        ];
        assert!(Transcript::from_messages(valid).is_ok());

        let invalid = vec![
            msg(Role::Moderator, Round::Framing, 0),
            msg(Role::PanelistA, Round::Evidence, 5),
        ];
        assert!(Transcript::from_messages(invalid).is_err());
    }
}
