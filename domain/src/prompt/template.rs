//! Prompt templates for each discussion round

use crate::convergence::position::PanelistPosition;
use crate::discussion::role::Role;

/// Templates for generating prompts at each stage of the protocol
pub struct PromptTemplate;

impl PromptTemplate {
    /// System prompt for the moderator's framing turn
    pub fn framing_system() -> &'static str {
        r#"You are the moderator of a structured panel discussion among three expert panelists.
Your task is to frame the topic for debate: state what is at issue, define any
ambiguous terms, and identify the two or three questions the panel must resolve.
Do not take a position yourself. Be concise and neutral."#
    }

    /// User prompt for the framing turn
    pub fn framing_prompt(topic: &str) -> String {
        format!(
            r#"Frame the following topic for panel discussion:

{topic}

Produce a short framing statement the panelists will respond to."#
        )
    }

    /// System prompt for a panelist's evidence turn
    pub fn evidence_system(panelist: Role) -> String {
        format!(
            r#"You are {} in a structured panel discussion.
Your task is to state your position on the topic and support it with your
strongest evidence and reasoning. You have not yet seen the other panelists'
statements; argue your own case. Be concise but substantive."#,
            panelist.display_name()
        )
    }

    /// User prompt for a panelist's evidence turn
    pub fn evidence_prompt(topic: &str, framing: &str) -> String {
        format!(
            r#"Topic: {topic}

The moderator framed the discussion as follows:

{framing}

State your position and present your evidence."#
        )
    }

    /// System prompt for a panelist's cross-examination turn
    pub fn cross_examination_system(panelist: Role) -> String {
        format!(
            r#"You are {} in a structured panel discussion, now in the cross-examination round.
Your task is to engage with the other panelists' statements: identify their
strongest points, challenge their weakest ones, and note concrete risks their
positions overlook. Address the arguments, not the panelists."#,
            panelist.display_name()
        )
    }

    /// User prompt for a panelist's cross-examination turn
    ///
    /// The acting panelist's own evidence statement, when present, is
    /// labeled as its own prior statement; peer statements are labeled by
    /// display name.
    pub fn cross_examination_prompt(
        topic: &str,
        framing: &str,
        own_statement: Option<&str>,
        peer_statements: &[(Role, &str)],
    ) -> String {
        let mut prompt = format!(
            r#"Topic: {topic}

Moderator's framing:

{framing}
"#
        );

        if let Some(own) = own_statement {
            prompt.push_str(&format!(
                "\nYour own statement from the evidence round, for reference:\n\n{own}\n"
            ));
        }

        prompt.push_str("\nThe other panelists' evidence statements:\n");
        for (role, statement) in peer_statements {
            prompt.push_str(&format!("\n--- {} ---\n{}\n", role.display_name(), statement));
        }

        prompt.push_str(
            r#"
Respond to the other panelists' statements. For each, give the strongest
point, your challenge to it, and any concrete risk it overlooks."#,
        );

        prompt
    }

    /// System prompt for the moderator's synthesis turns
    pub fn synthesis_system() -> &'static str {
        r#"You are the moderator of a structured panel discussion, now synthesizing
the discussion into a consensus statement. Identify where the panelists agree,
weigh their disagreements, and draft a conclusion the whole panel could accept.
Be balanced; give weight to well-supported arguments regardless of source."#
    }

    /// User prompt for the moderator's first synthesis draft
    pub fn synthesis_draft_prompt(topic: &str, sections: &[(Role, &str)]) -> String {
        let mut prompt = format!(
            r#"Topic: {topic}

The full discussion so far:
"#
        );

        for (role, content) in sections {
            prompt.push_str(&format!("\n--- {} ---\n{}\n", role.display_name(), content));
        }

        prompt.push_str(
            r#"
Draft a consensus statement: the conclusion, the key points supporting it,
and any remaining disagreements you could not reconcile."#,
        );

        prompt
    }

    /// System prompt for a panelist's position on a synthesis draft
    pub fn position_system(panelist: Role) -> String {
        format!(
            r#"You are {} in a structured panel discussion. The moderator has drafted a
consensus statement. Begin your reply with the single word AGREE if the draft
fairly represents the discussion and your position, or DISAGREE followed by
your specific objection if it does not. Keep your reasoning short."#,
            panelist.display_name()
        )
    }

    /// User prompt for a panelist's position on a synthesis draft
    ///
    /// Carries the discussion alongside the draft so the panelist judges
    /// the draft against what was actually said.
    pub fn position_prompt(topic: &str, sections: &[(Role, &str)], draft: &str) -> String {
        let mut prompt = format!(
            r#"Topic: {topic}

The discussion so far:
"#
        );

        for (role, content) in sections {
            prompt.push_str(&format!("\n--- {} ---\n{}\n", role.display_name(), content));
        }

        prompt.push_str(&format!(
            r#"
The moderator's current consensus draft:

{draft}

Reply with AGREE, or DISAGREE and your objection."#
        ));

        prompt
    }

    /// User prompt for the moderator's revision of a rejected draft
    pub fn revision_prompt(topic: &str, draft: &str, objections: &[PanelistPosition]) -> String {
        let mut prompt = format!(
            r#"Topic: {topic}

Your previous consensus draft:

{draft}

The panel raised these objections:
"#
        );

        for position in objections {
            prompt.push_str(&format!(
                "\n--- {} ---\n{}\n",
                position.role.display_name(),
                position.reason
            ));
        }

        prompt.push_str(
            r#"
Revise the consensus draft to address the objections where they have merit.
Where an objection cannot be reconciled, note it as a remaining disagreement."#,
        );

        prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convergence::position::Stance;

    #[test]
    fn test_framing_prompt_contains_topic() {
        let prompt = PromptTemplate::framing_prompt("Is X true?");
        assert!(prompt.contains("Is X true?"));
    }

    #[test]
    fn test_evidence_system_names_panelist() {
        let system = PromptTemplate::evidence_system(Role::PanelistB);
        assert!(system.contains("Panelist B"));
    }

    #[test]
    fn test_cross_examination_labels_own_statement() {
        let prompt = PromptTemplate::cross_examination_prompt(
            "Is X true?",
            "The framing.",
            Some("My own case."),
            &[(Role::PanelistB, "B's case."), (Role::PanelistC, "C's case.")],
        );
        assert!(prompt.contains("Your own statement"));
        assert!(prompt.contains("My own case."));
        assert!(prompt.contains("--- Panelist B ---"));
        assert!(prompt.contains("--- Panelist C ---"));
    }

    #[test]
    fn test_cross_examination_without_own_statement() {
        let prompt = PromptTemplate::cross_examination_prompt(
            "Is X true?",
            "The framing.",
            None,
            &[(Role::PanelistB, "B's case.")],
        );
        assert!(!prompt.contains("Your own statement"));
    }

    #[test]
    fn test_revision_prompt_includes_objections() {
        let objections = vec![PanelistPosition {
            role: Role::PanelistC,
            stance: Stance::Disagree,
            reason: "The draft ignores the cost argument.".to_string(),
        }];
        let prompt = PromptTemplate::revision_prompt("Is X true?", "Draft v1", &objections);
        assert!(prompt.contains("Panelist C"));
        assert!(prompt.contains("cost argument"));
    }
}
