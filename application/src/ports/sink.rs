//! Presentation sink port
//!
//! Defines the ordered event stream both the live engine and the replay
//! driver emit toward a presentation layer, plus the pacing control the
//! sink feeds back during replay.

use roundtable_domain::{Message, Role, Round};

/// Ordered presentation events for one discussion
///
/// Implementations live in the presentation layer (console, web, test
/// recorders). Events arrive in a fixed order: one header, then
/// thinking/message events interleaved with round transitions, then at
/// most one final consensus.
pub trait DiscussionSink: Send + Sync {
    /// A discussion (or replay) begins
    fn on_header(&self, topic: &str, round: Round);

    /// A participant's turn has been dispatched
    fn on_thinking(&self, role: Role);

    /// An utterance was appended to the transcript
    fn on_message(&self, message: &Message);

    /// The discussion advanced to the next round
    fn on_round_transition(&self, from: Round, to: Round);

    /// The consensus artifact is final
    fn on_final_consensus(&self, content: &str);
}

/// No-op sink for when presentation is not needed
pub struct NoSink;

impl DiscussionSink for NoSink {
    fn on_header(&self, _topic: &str, _round: Round) {}
    fn on_thinking(&self, _role: Role) {}
    fn on_message(&self, _message: &Message) {}
    fn on_round_transition(&self, _from: Round, _to: Round) {}
    fn on_final_consensus(&self, _content: &str) {}
}

/// Pacing decision fed back from the sink during replay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayControl {
    /// Show the next message
    Advance,
    /// Jump to the Convergence round and play it without pausing
    FastForward,
}

/// Source of pacing decisions during replay
///
/// Consulted after each message while stepping; never consulted once a
/// fast-forward is underway.
pub trait ReplayPacer {
    fn next_control(&mut self) -> ReplayControl;
}

/// Pacer that never pauses; used for non-interactive replay
pub struct AutoAdvance;

impl ReplayPacer for AutoAdvance {
    fn next_control(&mut self) -> ReplayControl {
        ReplayControl::Advance
    }
}
