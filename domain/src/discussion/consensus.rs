//! Consensus artifact produced by the Convergence round

use super::role::Role;
use super::round::Round;
use serde::{Deserialize, Serialize};

/// The Convergence round's synthesized output
///
/// Exactly one exists per completed discussion; its absence means the
/// discussion never finished. Always authored by the moderator. Partial
/// convergence (not every panelist agreed) is an accepted outcome, not a
/// failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsensusArtifact {
    /// The final synthesis text
    pub summary: String,
    /// Panelists that agreed with the final draft
    #[serde(default)]
    pub agreed_by: Vec<Role>,
    /// How many draft/feedback iterations the refinement loop ran
    #[serde(default)]
    pub refinement_rounds: usize,
}

impl ConsensusArtifact {
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            agreed_by: Vec::new(),
            refinement_rounds: 0,
        }
    }

    pub fn with_agreement(mut self, agreed_by: Vec<Role>, refinement_rounds: usize) -> Self {
        self.agreed_by = agreed_by;
        self.refinement_rounds = refinement_rounds;
        self
    }

    /// The round this artifact belongs to; always Convergence
    pub fn round(&self) -> Round {
        Round::Convergence
    }

    /// The role that produced this artifact; always the moderator
    pub fn produced_by(&self) -> Role {
        Role::Moderator
    }

    /// Whether every active panelist agreed with the final draft
    pub fn is_unanimous(&self, active_panelists: usize) -> bool {
        self.agreed_by.len() == active_panelists && active_panelists > 0
    }
}
