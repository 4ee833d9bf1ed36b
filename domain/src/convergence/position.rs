//! Panelist positions on a synthesis draft
//!
//! Extracts a structured agree/disagree decision from a free-form reply.
//! Pure text matching, no I/O. Conservative: ambiguity reads as
//! disagreement, so an unclear reply can never terminate the refinement
//! loop early.

use crate::discussion::role::Role;
use serde::{Deserialize, Serialize};

/// A panelist's stance on the moderator's current draft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stance {
    Agree,
    Disagree,
}

impl Stance {
    pub fn is_agree(&self) -> bool {
        matches!(self, Stance::Agree)
    }
}

/// A panelist's parsed reply to a synthesis draft
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelistPosition {
    pub role: Role,
    pub stance: Stance,
    /// The full reply text, kept as the objection when disagreeing
    pub reason: String,
}

impl PanelistPosition {
    /// Parse a free-form reply into a position
    pub fn from_reply(role: Role, reply: &str) -> Self {
        Self {
            role,
            stance: parse_stance(reply),
            reason: reply.to_string(),
        }
    }

    pub fn is_agree(&self) -> bool {
        self.stance.is_agree()
    }
}

/// Parse a reply for an explicit AGREE/DISAGREE decision
///
/// Agreement requires an explicit AGREE that is not part of a negation;
/// any DISAGREE marker wins. Everything ambiguous is disagreement.
pub fn parse_stance(reply: &str) -> Stance {
    let upper = reply.to_uppercase();

    // DISAGREE contains AGREE as a substring, so check refusals first
    let disagreed = upper.contains("DISAGREE")
        || upper.contains("DO NOT AGREE")
        || upper.contains("DON'T AGREE")
        || upper.contains("CANNOT AGREE");

    if disagreed {
        return Stance::Disagree;
    }

    if upper.contains("AGREE") {
        Stance::Agree
    } else {
        Stance::Disagree
    }
}
