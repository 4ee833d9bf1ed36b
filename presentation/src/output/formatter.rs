//! Text formatting for stored sessions

use colored::Colorize;
use roundtable_domain::{Round, Session, SessionSummary};

/// Formats sessions and session listings for console display
pub struct SessionFormatter;

impl SessionFormatter {
    /// Format a full session transcript
    pub fn format(session: &Session) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{} {}\n{} {} ({})\n",
            "Topic:".cyan().bold(),
            session.topic,
            "Session:".cyan().bold(),
            session.id,
            session.status,
        ));

        let mut current_round: Option<Round> = None;
        for message in &session.messages {
            if current_round != Some(message.round) {
                current_round = Some(message.round);
                output.push_str(&format!(
                    "\n{}\n",
                    format!("=== {} ===", message.round.display_name()).bold()
                ));
            }
            output.push_str(&format!(
                "\n{}\n{}\n",
                message.role.display_name().yellow().bold(),
                message.content
            ));
        }

        if let Some(consensus) = &session.consensus {
            output.push_str(&format!(
                "\n{}\n{}\n",
                "--- Final Consensus ---".green().bold(),
                consensus.summary
            ));
            if !consensus.agreed_by.is_empty() {
                let names: Vec<&str> = consensus
                    .agreed_by
                    .iter()
                    .map(|role| role.display_name())
                    .collect();
                output.push_str(&format!(
                    "{} {}\n",
                    "Agreed by:".green(),
                    names.join(", ")
                ));
            }
        }

        output
    }

    /// Format a session listing, one line per session
    pub fn format_list(summaries: &[SessionSummary]) -> String {
        if summaries.is_empty() {
            return "No saved sessions found.".to_string();
        }

        let mut output = String::new();
        for summary in summaries {
            output.push_str(&format!(
                "{}  [{}]  {}  ({})\n",
                summary.id,
                summary.created_at.format("%Y-%m-%d %H:%M"),
                summary.topic,
                summary.status,
            ));
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use roundtable_domain::{ConsensusArtifact, DiscussionStatus, Message, Role};

    fn session() -> Session {
        Session {
            id: "sess-1".to_string(),
            topic: "Is X true?".to_string(),
            created_at: Utc::now(),
            messages: vec![
                Message::new(Role::Moderator, Round::Framing, "The framing.", 0),
                Message::new(Role::PanelistA, Round::Evidence, "The evidence.", 1),
            ],
            consensus: Some(
                ConsensusArtifact::new("The conclusion.")
                    .with_agreement(vec![Role::PanelistA], 1),
            ),
            status: DiscussionStatus::Completed,
        }
    }

    #[test]
    fn test_format_contains_rounds_and_consensus() {
        colored::control::set_override(false);
        let text = SessionFormatter::format(&session());
        assert!(text.contains("Is X true?"));
        assert!(text.contains("=== Framing ==="));
        assert!(text.contains("=== Evidence ==="));
        assert!(text.contains("The conclusion."));
        assert!(text.contains("Agreed by: Panelist A"));
    }

    #[test]
    fn test_format_list_empty() {
        assert_eq!(
            SessionFormatter::format_list(&[]),
            "No saved sessions found."
        );
    }

    #[test]
    fn test_format_list_lines() {
        colored::control::set_override(false);
        let listing = SessionFormatter::format_list(&[session().summary()]);
        assert!(listing.contains("sess-1"));
        assert!(listing.contains("Is X true?"));
        assert!(listing.contains("completed"));
    }
}
