//! Convergence round - the bounded refinement loop
//!
//! The moderator issues a synthesis draft; each panelist returns an
//! AGREE/DISAGREE position; the moderator revises and the cycle repeats
//! until every collected position agrees or the iteration bound is
//! reached. The final moderator draft becomes the consensus artifact
//! either way: partial convergence is an accepted outcome.

use super::types::DiscussionError;
use super::RunDiscussionUseCase;
use crate::ports::generation::GenerationGateway;
use crate::ports::sink::DiscussionSink;
use roundtable_domain::{
    ConsensusArtifact, ContextAssembler, DiscussionState, PanelistPosition, Role, Round,
};
use tracing::{debug, info, warn};

impl<G: GenerationGateway + 'static> RunDiscussionUseCase<G> {
    pub(crate) async fn convergence_round(
        &self,
        state: &mut DiscussionState,
        sink: &dyn DiscussionSink,
    ) -> Result<(), DiscussionError> {
        let topic = state.topic().clone();
        // The discussion the panelists judge drafts against: everything
        // said before the Convergence round began.
        let discussion = state.transcript().clone();

        sink.on_thinking(Role::Moderator);
        let request = ContextAssembler::synthesis_draft(&topic, &discussion);
        let mut draft = match self.generate(Role::Moderator, &request).await {
            Ok(text) => {
                let message = state.record(Role::Moderator, &text)?;
                sink.on_message(message);
                text
            }
            Err(source) => {
                return Err(DiscussionError::RoleFailed {
                    role: Role::Moderator,
                    round: Round::Convergence,
                    source,
                });
            }
        };

        let bound = self.behavior().max_refinement_rounds.max(1);
        let mut agreed_by: Vec<Role> = Vec::new();
        let mut iterations = 0;

        for iteration in 1..=bound {
            iterations = iteration;
            debug!("Convergence iteration {iteration}/{bound}");

            let mut positions: Vec<PanelistPosition> = Vec::new();
            for panelist in Role::panelists() {
                self.ensure_active()?;
                sink.on_thinking(panelist);
                let request =
                    ContextAssembler::panelist_position(&topic, &discussion, &draft, panelist);

                match self.generate(panelist, &request).await {
                    Ok(reply) => {
                        let message = state.record(panelist, &reply)?;
                        sink.on_message(message);
                        positions.push(PanelistPosition::from_reply(panelist, &reply));
                    }
                    Err(error) => {
                        warn!("{panelist} abstains from convergence feedback: {error}");
                        state.record_abstention(panelist);
                    }
                }
            }

            agreed_by = positions
                .iter()
                .filter(|p| p.is_agree())
                .map(|p| p.role)
                .collect();
            let objections: Vec<PanelistPosition> =
                positions.into_iter().filter(|p| !p.is_agree()).collect();

            // Zero collected positions leaves the draft standing
            // unchallenged; the loop exits just as it does on unanimity.
            if objections.is_empty() {
                info!("Convergence reached after {iteration} iteration(s)");
                break;
            }
            if iteration == bound {
                info!("Refinement bound reached with {} objection(s) standing", objections.len());
                break;
            }

            self.ensure_active()?;
            sink.on_thinking(Role::Moderator);
            let request = ContextAssembler::revision(&topic, &draft, &objections);
            draft = match self.generate(Role::Moderator, &request).await {
                Ok(text) => {
                    let message = state.record(Role::Moderator, &text)?;
                    sink.on_message(message);
                    text
                }
                Err(source) => {
                    return Err(DiscussionError::RoleFailed {
                        role: Role::Moderator,
                        round: Round::Convergence,
                        source,
                    });
                }
            };
        }

        let artifact = ConsensusArtifact::new(draft).with_agreement(agreed_by, iterations);
        sink.on_final_consensus(&artifact.summary);
        state.complete(artifact);
        Ok(())
    }
}
