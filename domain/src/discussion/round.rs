//! Round stages of the fixed discussion protocol

use serde::{Deserialize, Serialize};

/// Stage of a discussion, ordered 0-3
///
/// Determines which roles act and which context-assembly rule applies.
/// The protocol never skips a round and never repeats one; only the
/// Convergence round contains an internal refinement sub-loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Round {
    /// The moderator frames the topic
    Framing,
    /// Each panelist states its case, blind to the others
    Evidence,
    /// Each panelist responds to the other panelists' cases
    CrossExamination,
    /// Iterative moderator synthesis until agreement or the bound
    Convergence,
}

impl Round {
    /// Numeric index of this round (0-3)
    pub fn index(&self) -> u8 {
        match self {
            Round::Framing => 0,
            Round::Evidence => 1,
            Round::CrossExamination => 2,
            Round::Convergence => 3,
        }
    }

    /// The round that follows this one, if any
    pub fn next(&self) -> Option<Round> {
        match self {
            Round::Framing => Some(Round::Evidence),
            Round::Evidence => Some(Round::CrossExamination),
            Round::CrossExamination => Some(Round::Convergence),
            Round::Convergence => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Round::Framing => "framing",
            Round::Evidence => "evidence",
            Round::CrossExamination => "cross_examination",
            Round::Convergence => "convergence",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Round::Framing => "Framing",
            Round::Evidence => "Evidence",
            Round::CrossExamination => "Cross-Examination",
            Round::Convergence => "Convergence",
        }
    }

    /// All rounds in protocol order
    pub fn all() -> [Round; 4] {
        [
            Round::Framing,
            Round::Evidence,
            Round::CrossExamination,
            Round::Convergence,
        ]
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_order() {
        assert!(Round::Framing < Round::Evidence);
        assert!(Round::Evidence < Round::CrossExamination);
        assert!(Round::CrossExamination < Round::Convergence);
    }

    #[test]
    fn test_round_progression() {
        assert_eq!(Round::Framing.next(), Some(Round::Evidence));
        assert_eq!(Round::Evidence.next(), Some(Round::CrossExamination));
        assert_eq!(Round::CrossExamination.next(), Some(Round::Convergence));
        assert_eq!(Round::Convergence.next(), None);
    }

    #[test]
    fn test_round_indices() {
        for (i, round) in Round::all().iter().enumerate() {
            assert_eq!(round.index() as usize, i);
        }
    }
}
