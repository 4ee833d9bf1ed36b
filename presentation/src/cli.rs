//! CLI definition

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Roundtable - a moderated panel discussion among LLMs
#[derive(Parser, Debug)]
#[command(name = "roundtable", version, about)]
pub struct Cli {
    /// Verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to a config file (overrides discovered configs)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a new discussion on a topic
    Discuss {
        /// The topic to debate
        topic: String,

        /// Suppress live console output
        #[arg(short, long)]
        quiet: bool,
    },

    /// List stored sessions
    List,

    /// Replay a stored session
    Replay {
        /// Session identifier (see `list`)
        id: String,

        /// Jump straight to the Convergence round
        #[arg(long)]
        fast_forward: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discuss_parses() {
        let cli = Cli::try_parse_from(["roundtable", "discuss", "Is X true?"]).unwrap();
        match cli.command {
            Command::Discuss { topic, quiet } => {
                assert_eq!(topic, "Is X true?");
                assert!(!quiet);
            }
            _ => panic!("expected discuss command"),
        }
    }

    #[test]
    fn test_replay_with_fast_forward() {
        let cli =
            Cli::try_parse_from(["roundtable", "replay", "sess-1", "--fast-forward"]).unwrap();
        match cli.command {
            Command::Replay { id, fast_forward } => {
                assert_eq!(id, "sess-1");
                assert!(fast_forward);
            }
            _ => panic!("expected replay command"),
        }
    }

    #[test]
    fn test_verbosity_counts() {
        let cli = Cli::try_parse_from(["roundtable", "-vv", "list"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
