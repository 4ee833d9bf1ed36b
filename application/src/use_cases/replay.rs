//! Replay Session use case
//!
//! Walks a persisted session against a presentation sink, one message
//! at a time, honoring sink-driven pacing. Performs no generation calls
//! and never mutates the session: the same session always yields the
//! identical event sequence for the same pacing decisions.

use crate::ports::sink::{DiscussionSink, ReplayControl, ReplayPacer};
use roundtable_domain::{Round, Session};

/// Use case for replaying a stored session
pub struct ReplaySessionUseCase;

impl ReplaySessionUseCase {
    /// Replay the session's message sequence against the sink
    ///
    /// The pacer is consulted after each message while stepping. A
    /// fast-forward jumps to the first Convergence message and plays
    /// the rest without further pacing; when no Convergence message
    /// exists, stepping simply continues.
    pub fn execute(session: &Session, sink: &dyn DiscussionSink, pacer: &mut dyn ReplayPacer) {
        sink.on_header(&session.topic, Round::Framing);

        let messages = &session.messages;
        let mut current_round = Round::Framing;
        let mut fast_forwarding = false;
        let mut index = 0;

        while index < messages.len() {
            let message = &messages[index];
            if message.round != current_round {
                sink.on_round_transition(current_round, message.round);
                current_round = message.round;
            }
            sink.on_message(message);
            index += 1;

            if fast_forwarding || index >= messages.len() {
                continue;
            }

            match pacer.next_control() {
                ReplayControl::Advance => {}
                ReplayControl::FastForward => {
                    if let Some(offset) = messages[index..]
                        .iter()
                        .position(|m| m.round == Round::Convergence)
                    {
                        index += offset;
                        fast_forwarding = true;
                    }
                }
            }
        }

        if let Some(consensus) = &session.consensus {
            sink.on_final_consensus(&consensus.summary);
        }
    }
}
