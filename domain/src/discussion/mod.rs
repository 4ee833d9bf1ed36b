//! Discussion protocol types
//!
//! The entities that make up one live discussion: the fixed participant
//! roster ([`role::Role`]), the round sequence ([`round::Round`]), the
//! append-only [`transcript::Transcript`] of [`message::Message`]s, the
//! mutable [`state::DiscussionState`] aggregate, and the final
//! [`consensus::ConsensusArtifact`].

pub mod consensus;
pub mod message;
pub mod role;
pub mod round;
pub mod state;
pub mod transcript;
