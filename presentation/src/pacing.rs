//! Replay pacing from the terminal

use roundtable_application::{ReplayControl, ReplayPacer};
use std::io::{BufRead, Write};

/// Interactive pacer: Enter advances, `f` fast-forwards to the
/// Convergence round
pub struct TerminalPacer;

impl ReplayPacer for TerminalPacer {
    fn next_control(&mut self) -> ReplayControl {
        print!("\n[Enter to continue, f to fast-forward to consensus] ");
        let _ = std::io::stdout().flush();

        let mut line = String::new();
        if std::io::stdin().lock().read_line(&mut line).is_err() {
            return ReplayControl::Advance;
        }
        if line.trim().eq_ignore_ascii_case("f") {
            ReplayControl::FastForward
        } else {
            ReplayControl::Advance
        }
    }
}

/// Pacer that jumps straight to the Convergence round
pub struct SkipToConsensus;

impl ReplayPacer for SkipToConsensus {
    fn next_control(&mut self) -> ReplayControl {
        ReplayControl::FastForward
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_to_consensus_always_fast_forwards() {
        let mut pacer = SkipToConsensus;
        assert_eq!(pacer.next_control(), ReplayControl::FastForward);
        assert_eq!(pacer.next_control(), ReplayControl::FastForward);
    }
}
