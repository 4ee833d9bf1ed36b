//! Run Discussion use case
//!
//! Drives one discussion from topic input to a terminal session record:
//! the four-round state machine, the per-round turn dispatch, and the
//! session lifecycle around them.
//!
//! Round progression is fixed: Framing → Evidence → CrossExamination →
//! Convergence → Done. No round is skipped or repeated; only the
//! Convergence round loops internally. Panelist failures become
//! abstentions; moderator failures abort the discussion, because no
//! role substitutes for the moderator's framing and synthesis.

mod convergence;
mod types;

pub use types::{DiscussionError, DiscussionReport};

use crate::config::BehaviorConfig;
use crate::ports::generation::{GenerationError, GenerationGateway};
use crate::ports::session_store::SessionStore;
use crate::ports::sink::{DiscussionSink, NoSink};
use crate::retry::call_with_retry;
use roundtable_domain::{
    ContextAssembler, DiscussionState, GenerationRequest, Role, Round, Session, Topic,
};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Use case for running one full discussion
pub struct RunDiscussionUseCase<G: GenerationGateway + 'static> {
    gateway: Arc<G>,
    store: Arc<dyn SessionStore>,
    behavior: BehaviorConfig,
    cancellation: Option<CancellationToken>,
}

impl<G: GenerationGateway + 'static> RunDiscussionUseCase<G> {
    pub fn new(gateway: Arc<G>, store: Arc<dyn SessionStore>) -> Self {
        Self {
            gateway,
            store,
            behavior: BehaviorConfig::default(),
            cancellation: None,
        }
    }

    pub fn with_behavior(mut self, behavior: BehaviorConfig) -> Self {
        self.behavior = behavior;
        self
    }

    /// Attach a cancellation token, observed between turns only; an
    /// in-flight generation call is allowed to finish on its own
    /// schedule
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Execute the use case without presentation output
    pub async fn execute(&self, topic: Topic) -> Result<DiscussionReport, DiscussionError> {
        self.execute_with_sink(topic, &NoSink).await
    }

    /// Execute the use case, emitting live events to the sink
    pub async fn execute_with_sink(
        &self,
        topic: Topic,
        sink: &dyn DiscussionSink,
    ) -> Result<DiscussionReport, DiscussionError> {
        let mut state = DiscussionState::new(topic);
        state.begin();
        info!("Starting discussion on: {}", state.topic());
        sink.on_header(state.topic().content(), state.current_round());

        match self.run_rounds(&mut state, sink).await {
            Ok(()) => {
                let session = Session::snapshot(Uuid::new_v4().to_string(), &state);
                let mut report = DiscussionReport {
                    abstentions: state.abstentions().to_vec(),
                    session,
                    saved_as: None,
                    storage_error: None,
                };
                match self.store.save(&report.session).await {
                    Ok(id) => {
                        info!("Discussion saved as session {id}");
                        report.saved_as = Some(id);
                    }
                    Err(error) => {
                        warn!("Could not persist completed session: {error}");
                        report.storage_error = Some(error);
                    }
                }
                Ok(report)
            }
            Err(error) => {
                state.abort();
                // Best-effort partial snapshot; the caller still gets the
                // original failure either way.
                let session = Session::snapshot(Uuid::new_v4().to_string(), &state);
                match self.store.save(&session).await {
                    Ok(id) => info!("Partial transcript saved as session {id}"),
                    Err(save_error) => {
                        warn!("Could not persist partial transcript: {save_error}");
                    }
                }
                Err(error)
            }
        }
    }

    async fn run_rounds(
        &self,
        state: &mut DiscussionState,
        sink: &dyn DiscussionSink,
    ) -> Result<(), DiscussionError> {
        self.ensure_active()?;
        self.framing_round(state, sink).await?;
        self.transition(state, sink);

        self.ensure_active()?;
        self.evidence_round(state, sink).await?;
        self.transition(state, sink);

        self.ensure_active()?;
        self.cross_examination_round(state, sink).await?;
        self.transition(state, sink);

        self.ensure_active()?;
        self.convergence_round(state, sink).await?;
        Ok(())
    }

    /// Framing: a single moderator turn establishes the discussion's
    /// framing for every subsequent round
    async fn framing_round(
        &self,
        state: &mut DiscussionState,
        sink: &dyn DiscussionSink,
    ) -> Result<(), DiscussionError> {
        sink.on_thinking(Role::Moderator);
        let request = ContextAssembler::framing(state.topic());

        let text = self
            .generate(Role::Moderator, &request)
            .await
            .map_err(|source| DiscussionError::RoleFailed {
                role: Role::Moderator,
                round: Round::Framing,
                source,
            })?;

        let message = state.record(Role::Moderator, text)?;
        sink.on_message(message);
        Ok(())
    }

    /// Evidence: all three panelists act once, independently
    ///
    /// Context payloads are fixed from one snapshot before any call is
    /// dispatched, so no panelist observes another's same-round output.
    /// The round closes only when every panelist reaches a terminal
    /// outcome (success or abstention); results are appended in protocol
    /// order so sequence numbers are deterministic.
    async fn evidence_round(
        &self,
        state: &mut DiscussionState,
        sink: &dyn DiscussionSink,
    ) -> Result<(), DiscussionError> {
        let topic = state.topic().clone();
        let snapshot = state.transcript().clone();

        let mut join_set = JoinSet::new();
        for panelist in Role::panelists() {
            sink.on_thinking(panelist);
            let request = ContextAssembler::evidence(&topic, &snapshot, panelist);
            let gateway = Arc::clone(&self.gateway);
            let policy = self.behavior.retry.clone();

            join_set.spawn(async move {
                let result =
                    call_with_retry(&policy, || gateway.generate(panelist, &request)).await;
                (panelist, result)
            });
        }

        let mut outcomes: HashMap<Role, Result<String, GenerationError>> = HashMap::new();
        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((panelist, result)) => {
                    outcomes.insert(panelist, result);
                }
                Err(error) => warn!("Panelist task failed to join: {error}"),
            }
        }

        for panelist in Role::panelists() {
            match outcomes.remove(&panelist) {
                Some(Ok(text)) => {
                    debug!("{panelist} contributed evidence");
                    let message = state.record(panelist, text)?;
                    sink.on_message(message);
                }
                Some(Err(error)) => {
                    warn!("{panelist} abstains from evidence: {error}");
                    state.record_abstention(panelist);
                }
                None => state.record_abstention(panelist),
            }
        }

        if state.abstained_in(Round::Evidence).len() == Role::panelists().len() {
            return Err(DiscussionError::AllPanelistsAbstained(Round::Evidence));
        }
        Ok(())
    }

    /// Cross-examination: each panelist responds to the others' evidence
    ///
    /// Turns run in protocol order against the snapshot taken at round
    /// start; the context rule admits only Evidence-round material, so
    /// earlier cross-examination turns stay invisible to later ones.
    async fn cross_examination_round(
        &self,
        state: &mut DiscussionState,
        sink: &dyn DiscussionSink,
    ) -> Result<(), DiscussionError> {
        let topic = state.topic().clone();
        let snapshot = state.transcript().clone();

        for panelist in Role::panelists() {
            self.ensure_active()?;
            sink.on_thinking(panelist);
            let request = ContextAssembler::cross_examination(&topic, &snapshot, panelist);

            match self.generate(panelist, &request).await {
                Ok(text) => {
                    let message = state.record(panelist, text)?;
                    sink.on_message(message);
                }
                Err(error) => {
                    warn!("{panelist} abstains from cross-examination: {error}");
                    state.record_abstention(panelist);
                }
            }
        }
        Ok(())
    }

    /// One generation call under the configured retry policy
    pub(crate) async fn generate(
        &self,
        role: Role,
        request: &GenerationRequest,
    ) -> Result<String, GenerationError> {
        call_with_retry(&self.behavior.retry, || self.gateway.generate(role, request)).await
    }

    pub(crate) fn ensure_active(&self) -> Result<(), DiscussionError> {
        if let Some(token) = &self.cancellation
            && token.is_cancelled()
        {
            return Err(DiscussionError::Cancelled);
        }
        Ok(())
    }

    pub(crate) fn behavior(&self) -> &BehaviorConfig {
        &self.behavior
    }

    fn transition(&self, state: &mut DiscussionState, sink: &dyn DiscussionSink) {
        let from = state.current_round();
        if let Some(to) = state.advance_round() {
            info!("Round transition: {from} -> {to}");
            sink.on_round_transition(from, to);
        }
    }
}
