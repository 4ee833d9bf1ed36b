//! Presentation layer for roundtable
//!
//! Console rendering of live discussions and replays, plus the clap CLI
//! definition the binary parses.

pub mod cli;
pub mod output;
pub mod pacing;

// Re-export commonly used types
pub use cli::{Cli, Command};
pub use output::console::ConsoleSink;
pub use output::formatter::SessionFormatter;
pub use pacing::{SkipToConsensus, TerminalPacer};
