//! Context assembly - what each participant sees at each turn
//!
//! The assembler is the single authority for the protocol's visibility
//! rules. It is a pure function of (role, round, transcript snapshot);
//! callers fix the snapshot before dispatching any turn of a round, so
//! no participant can observe a same-round peer's output.

use super::template::PromptTemplate;
use crate::core::topic::Topic;
use crate::discussion::role::Role;
use crate::discussion::round::Round;
use crate::discussion::transcript::Transcript;

/// The exact payload handed to a generation call
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub system: String,
    pub prompt: String,
}

/// Builds the input for each participant's turn
pub struct ContextAssembler;

impl ContextAssembler {
    /// Framing round: moderator only, topic only
    pub fn framing(topic: &Topic) -> GenerationRequest {
        GenerationRequest {
            system: PromptTemplate::framing_system().to_string(),
            prompt: PromptTemplate::framing_prompt(topic.content()),
        }
    }

    /// Evidence round: topic plus the moderator's framing statement
    ///
    /// The same snapshot must be used for all three panelists; the
    /// payload never includes any Evidence-round message.
    pub fn evidence(topic: &Topic, snapshot: &Transcript, panelist: Role) -> GenerationRequest {
        let framing = Self::framing_statement(snapshot);
        GenerationRequest {
            system: PromptTemplate::evidence_system(panelist),
            prompt: PromptTemplate::evidence_prompt(topic.content(), framing),
        }
    }

    /// Cross-examination round: topic, framing, and all Evidence statements
    ///
    /// The acting panelist's own Evidence statement is included only as
    /// its own prior statement, labeled as such; the other panelists'
    /// statements are the material to engage with.
    pub fn cross_examination(
        topic: &Topic,
        snapshot: &Transcript,
        panelist: Role,
    ) -> GenerationRequest {
        let framing = Self::framing_statement(snapshot);

        let mut own_statement = None;
        let mut peer_statements = Vec::new();
        for message in snapshot.messages_in(Round::Evidence) {
            if message.role == panelist {
                own_statement = Some(message.content.as_str());
            } else {
                peer_statements.push((message.role, message.content.as_str()));
            }
        }

        GenerationRequest {
            system: PromptTemplate::cross_examination_system(panelist),
            prompt: PromptTemplate::cross_examination_prompt(
                topic.content(),
                framing,
                own_statement,
                &peer_statements,
            ),
        }
    }

    /// Convergence round: the moderator's first synthesis draft, built
    /// from the full transcript
    pub fn synthesis_draft(topic: &Topic, transcript: &Transcript) -> GenerationRequest {
        let sections: Vec<(Role, &str)> = transcript
            .messages()
            .iter()
            .map(|m| (m.role, m.content.as_str()))
            .collect();

        GenerationRequest {
            system: PromptTemplate::synthesis_system().to_string(),
            prompt: PromptTemplate::synthesis_draft_prompt(topic.content(), &sections),
        }
    }

    /// Convergence round: a panelist's agree/disagree position on a draft
    ///
    /// The panelist sees the current draft plus the full discussion that
    /// led to it.
    pub fn panelist_position(
        topic: &Topic,
        discussion: &Transcript,
        draft: &str,
        panelist: Role,
    ) -> GenerationRequest {
        let sections: Vec<(Role, &str)> = discussion
            .messages()
            .iter()
            .map(|m| (m.role, m.content.as_str()))
            .collect();

        GenerationRequest {
            system: PromptTemplate::position_system(panelist),
            prompt: PromptTemplate::position_prompt(topic.content(), &sections, draft),
        }
    }

    /// Convergence round: the moderator's revision of a challenged draft
    pub fn revision(
        topic: &Topic,
        draft: &str,
        objections: &[crate::convergence::position::PanelistPosition],
    ) -> GenerationRequest {
        GenerationRequest {
            system: PromptTemplate::synthesis_system().to_string(),
            prompt: PromptTemplate::revision_prompt(topic.content(), draft, objections),
        }
    }

    fn framing_statement(snapshot: &Transcript) -> &str {
        snapshot
            .messages_in(Round::Framing)
            .next()
            .map(|m| m.content.as_str())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discussion::message::Message;

    fn topic() -> Topic {
        Topic::new("Is X true?")
    }

    fn transcript_through_evidence() -> Transcript {
        let mut t = Transcript::new();
        t.append(Message::new(
            Role::Moderator,
            Round::Framing,
            "FRAMING-TEXT",
            0,
        ))
        .unwrap();
        t.append(Message::new(Role::PanelistA, Round::Evidence, "A-EVIDENCE", 1))
            .unwrap();
        t.append(Message::new(Role::PanelistB, Round::Evidence, "B-EVIDENCE", 2))
            .unwrap();
        t.append(Message::new(Role::PanelistC, Round::Evidence, "C-EVIDENCE", 3))
            .unwrap();
        t
    }

    #[test]
    fn test_framing_context_is_topic_only() {
        let request = ContextAssembler::framing(&topic());
        assert!(request.prompt.contains("Is X true?"));
        assert!(!request.prompt.contains("FRAMING-TEXT"));
    }

    #[test]
    fn test_evidence_context_sees_framing_only() {
        // Snapshot taken before any Evidence message exists
        let mut snapshot = Transcript::new();
        snapshot
            .append(Message::new(Role::Moderator, Round::Framing, "FRAMING-TEXT", 0))
            .unwrap();

        for panelist in Role::panelists() {
            let request = ContextAssembler::evidence(&topic(), &snapshot, panelist);
            assert!(request.prompt.contains("FRAMING-TEXT"));
            assert!(request.prompt.contains("Is X true?"));
        }
    }

    #[test]
    fn test_evidence_simultaneity() {
        // Even against a transcript that already holds Evidence messages,
        // the Evidence payload must not leak any of them.
        let snapshot = transcript_through_evidence();
        for panelist in Role::panelists() {
            let request = ContextAssembler::evidence(&topic(), &snapshot, panelist);
            assert!(!request.prompt.contains("A-EVIDENCE"));
            assert!(!request.prompt.contains("B-EVIDENCE"));
            assert!(!request.prompt.contains("C-EVIDENCE"));
        }
    }

    #[test]
    fn test_cross_examination_context_exact() {
        let snapshot = transcript_through_evidence();

        let request = ContextAssembler::cross_examination(&topic(), &snapshot, Role::PanelistB);
        // Own statement present, labeled as own
        assert!(request.prompt.contains("Your own statement"));
        assert!(request.prompt.contains("B-EVIDENCE"));
        // Peers present under their display names
        assert!(request.prompt.contains("--- Panelist A ---"));
        assert!(request.prompt.contains("A-EVIDENCE"));
        assert!(request.prompt.contains("--- Panelist C ---"));
        assert!(request.prompt.contains("C-EVIDENCE"));
        // Own statement is never listed as a peer
        assert!(!request.prompt.contains("--- Panelist B ---"));
    }

    #[test]
    fn test_cross_examination_with_abstained_self() {
        let mut snapshot = Transcript::new();
        snapshot
            .append(Message::new(Role::Moderator, Round::Framing, "FRAMING-TEXT", 0))
            .unwrap();
        snapshot
            .append(Message::new(Role::PanelistA, Round::Evidence, "A-EVIDENCE", 1))
            .unwrap();
        // Panelist B abstained: no Evidence message from it

        let request = ContextAssembler::cross_examination(&topic(), &snapshot, Role::PanelistB);
        assert!(!request.prompt.contains("Your own statement"));
        assert!(request.prompt.contains("A-EVIDENCE"));
    }

    #[test]
    fn test_synthesis_draft_covers_full_transcript() {
        let snapshot = transcript_through_evidence();
        let request = ContextAssembler::synthesis_draft(&topic(), &snapshot);
        for fragment in ["FRAMING-TEXT", "A-EVIDENCE", "B-EVIDENCE", "C-EVIDENCE"] {
            assert!(request.prompt.contains(fragment));
        }
    }

    #[test]
    fn test_position_context_carries_draft_and_discussion() {
        let snapshot = transcript_through_evidence();
        let request =
            ContextAssembler::panelist_position(&topic(), &snapshot, "DRAFT-1", Role::PanelistA);
        assert!(request.prompt.contains("DRAFT-1"));
        assert!(request.prompt.contains("FRAMING-TEXT"));
        assert!(request.prompt.contains("B-EVIDENCE"));
        assert!(request.system.contains("AGREE"));
    }
}
