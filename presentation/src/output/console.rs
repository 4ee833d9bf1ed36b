//! Console sink for live discussions and replays

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use roundtable_application::DiscussionSink;
use roundtable_domain::{Message, Role, Round};
use std::sync::Mutex;
use std::time::Duration;

/// Renders discussion events to the terminal
///
/// A spinner runs while a participant is thinking and is cleared when
/// its message (or abstention silence) arrives.
pub struct ConsoleSink {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn clear_spinner(&self) {
        if let Ok(mut guard) = self.spinner.lock()
            && let Some(spinner) = guard.take()
        {
            spinner.finish_and_clear();
        }
    }

    fn role_tag(role: Role) -> String {
        if role.is_moderator() {
            role.display_name().cyan().bold().to_string()
        } else {
            role.display_name().yellow().bold().to_string()
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl DiscussionSink for ConsoleSink {
    fn on_header(&self, topic: &str, round: Round) {
        println!();
        println!("{}", "=".repeat(64));
        println!("{} {}", "Roundtable:".cyan().bold(), topic);
        println!("{} {}", "Round:".cyan().bold(), round.display_name());
        println!("{}", "=".repeat(64));
    }

    fn on_thinking(&self, role: Role) {
        if let Ok(mut guard) = self.spinner.lock() {
            let spinner = ProgressBar::new_spinner();
            spinner.set_style(Self::spinner_style());
            spinner.set_message(format!("{} is thinking...", role.display_name()));
            spinner.enable_steady_tick(Duration::from_millis(120));
            *guard = Some(spinner);
        }
    }

    fn on_message(&self, message: &Message) {
        self.clear_spinner();
        println!();
        println!("{}", Self::role_tag(message.role));
        println!("{}", message.content);
    }

    fn on_round_transition(&self, from: Round, to: Round) {
        self.clear_spinner();
        println!();
        println!(
            "{}",
            format!("=== {} -> {} ===", from.display_name(), to.display_name())
                .bold()
        );
    }

    fn on_final_consensus(&self, content: &str) {
        self.clear_spinner();
        println!();
        println!("{}", "--- Final Consensus ---".green().bold());
        println!("{content}");
    }
}
