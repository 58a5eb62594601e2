//! Run Debate use case
//!
//! Orchestrates the debate flow: opening statement, per-round analysis
//! and scoring, final verdict. Each step builds a prompt, calls the model,
//! and either passes the text through (opening, verdict) or feeds it to the
//! score extractor and the round state machine (analysis).
//!
//! A failed model call never escapes as an error. It becomes substitute
//! text prefixed with the phase's failure message, and the state it was
//! applied to stays as it was so the action can simply be repeated.

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger, event,
};
use crate::ports::llm_gateway::LlmGateway;
use crate::ports::progress::ProgressNotifier;
use chrono::Utc;
use debate_domain::{
    DebateConfig, DebatePhase, DebateState, DomainError, MarkerScoreExtractor, PromptTemplate,
    RoundRecord, RoundScore, ScoreExtractor, Standing,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// A transition the state machine refused, handing the untouched state back.
#[derive(Error, Debug)]
#[error("{error}")]
pub struct RejectedTransition {
    pub state: Box<DebateState>,
    pub error: DomainError,
}

impl RejectedTransition {
    fn new(state: DebateState, error: DomainError) -> Self {
        Self {
            state: Box::new(state),
            error,
        }
    }

    pub fn into_state(self) -> DebateState {
        *self.state
    }
}

/// What happened to a submitted round
#[derive(Debug, Clone, PartialEq)]
pub enum RoundOutcome {
    /// The round was analyzed, scored and appended to the history
    Recorded(RoundRecord),
    /// The model call failed; nothing was recorded
    AnalysisFailed { message: String },
}

/// Result of [`DebateOrchestrator::submit_round`]: the (possibly advanced) state
#[derive(Debug)]
pub struct RoundSubmission {
    pub state: DebateState,
    pub outcome: RoundOutcome,
}

/// Final verdict text plus the advisory score-based standing
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub text: String,
    pub standing: Standing,
    /// True when `text` is substitute error text rather than a model verdict
    pub degraded: bool,
}

/// Use case for running a debate against an [`LlmGateway`]
pub struct DebateOrchestrator<G: LlmGateway + 'static, E: ScoreExtractor = MarkerScoreExtractor> {
    gateway: Arc<G>,
    extractor: E,
    logger: Arc<dyn ConversationLogger>,
}

impl<G: LlmGateway + 'static> DebateOrchestrator<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            extractor: MarkerScoreExtractor,
            logger: Arc::new(NoConversationLogger),
        }
    }
}

impl<G: LlmGateway + 'static, E: ScoreExtractor> DebateOrchestrator<G, E> {
    /// Swap the score matching strategy
    pub fn with_extractor<X: ScoreExtractor>(self, extractor: X) -> DebateOrchestrator<G, X> {
        DebateOrchestrator {
            gateway: self.gateway,
            extractor,
            logger: self.logger,
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Setup → in progress: ask the host for an opening statement.
    ///
    /// The debate starts even if the model call fails; the opening is then
    /// the substitute error text.
    pub async fn start_debate(
        &self,
        config: DebateConfig,
        progress: &dyn ProgressNotifier,
    ) -> DebateState {
        info!(
            "Starting debate on '{}' ({} vs {}, {} rounds)",
            config.topic(),
            config.party1_name(),
            config.party2_name(),
            config.max_rounds()
        );

        let prompt = PromptTemplate::opening(config.topic());
        let (opening, degraded) = match self
            .call_model(DebatePhase::Opening, None, &prompt, progress)
            .await
        {
            Ok(text) => (text, false),
            Err(substitute) => (substitute, true),
        };

        self.logger.log(ConversationEvent::new(
            event::DEBATE_STARTED,
            json!({
                "topic": config.topic(),
                "participants": config.participants(),
                "max_rounds": config.max_rounds(),
                "model": self.gateway.model_name(),
                "opening": opening,
                "degraded": degraded,
            }),
        ));

        DebateState::new(config, opening)
    }

    /// In progress → in progress / finished: analyze and score one round.
    ///
    /// Blank arguments or a finished debate are rejected before the model is
    /// called. A failed model call returns the unchanged state with
    /// [`RoundOutcome::AnalysisFailed`].
    pub async fn submit_round(
        &self,
        state: DebateState,
        party1_argument: &str,
        party2_argument: &str,
        progress: &dyn ProgressNotifier,
    ) -> Result<RoundSubmission, RejectedTransition> {
        if let Err(error) = state.validate_round_input(party1_argument, party2_argument) {
            info!("Round {} rejected: {}", state.current_round(), error);
            self.logger.log(ConversationEvent::new(
                event::ROUND_REJECTED,
                json!({ "round": state.current_round(), "reason": error.to_string() }),
            ));
            return Err(RejectedTransition::new(state, error));
        }

        let round = state.current_round();
        let prompt =
            PromptTemplate::analysis(state.config(), round, party1_argument, party2_argument);

        let analysis = match self
            .call_model(DebatePhase::Analysis, Some(round), &prompt, progress)
            .await
        {
            Ok(text) => text,
            Err(message) => {
                return Ok(RoundSubmission {
                    state,
                    outcome: RoundOutcome::AnalysisFailed { message },
                });
            }
        };

        let (p1, p2) = (state.config().party1_name(), state.config().party2_name());
        let scores = self.extractor.extract(&analysis, p1, p2);
        if scores.party1.is_zero() && scores.party2.is_zero() {
            warn!("Round {}: no readable score block, scoring both parties 0", round);
        }
        Self::warn_out_of_range(round, p1, &scores.party1);
        Self::warn_out_of_range(round, p2, &scores.party2);

        let record = RoundRecord::new(
            round,
            party1_argument,
            party2_argument,
            analysis,
            scores,
            Utc::now(),
        );

        let mut state = state;
        if let Err(error) = state.record_round(record.clone()) {
            return Err(RejectedTransition::new(state, error));
        }

        info!(
            "Round {} scored {}-{} (totals {}-{}){}",
            round,
            record.party1_score.total,
            record.party2_score.total,
            state.party1_total(),
            state.party2_total(),
            if state.is_finished() { ", debate finished" } else { "" }
        );
        self.logger.log(ConversationEvent::new(
            event::ROUND_ANALYZED,
            json!({
                "round": round,
                "analysis": record.analysis_text,
                "party1_score": record.party1_score,
                "party2_score": record.party2_score,
                "party1_total": state.party1_total(),
                "party2_total": state.party2_total(),
                "finished": state.is_finished(),
            }),
        ));

        Ok(RoundSubmission {
            state,
            outcome: RoundOutcome::Recorded(record),
        })
    }

    /// In progress → finished, allowed once at least one round is complete.
    pub fn end_early(&self, mut state: DebateState) -> Result<DebateState, RejectedTransition> {
        match state.end_early() {
            Ok(()) => {
                info!("Debate ended early after {} rounds", state.rounds_completed());
                self.logger.log(ConversationEvent::new(
                    event::DEBATE_ENDED_EARLY,
                    json!({
                        "rounds_completed": state.rounds_completed(),
                        "standing": state.standing(),
                    }),
                ));
                Ok(state)
            }
            Err(error) => {
                debug!("End early rejected: {}", error);
                Err(RejectedTransition::new(state, error))
            }
        }
    }

    /// Ask the judge for a final verdict. Repeatable once the debate is finished.
    pub async fn generate_verdict(
        &self,
        state: &DebateState,
        progress: &dyn ProgressNotifier,
    ) -> Result<Verdict, DomainError> {
        if !state.is_finished() {
            return Err(DomainError::DebateInProgress);
        }

        let prompt = PromptTemplate::verdict(state);
        let (text, degraded) = match self
            .call_model(DebatePhase::Verdict, None, &prompt, progress)
            .await
        {
            Ok(text) => (text, false),
            Err(substitute) => (substitute, true),
        };
        let standing = state.standing();

        self.logger.log(ConversationEvent::new(
            event::VERDICT_GENERATED,
            json!({
                "standing": standing,
                "verdict": text,
                "degraded": degraded,
            }),
        ));

        Ok(Verdict {
            text,
            standing,
            degraded,
        })
    }

    /// Call the model; on failure return the substitute text as `Err`.
    async fn call_model(
        &self,
        phase: DebatePhase,
        round: Option<u32>,
        prompt: &str,
        progress: &dyn ProgressNotifier,
    ) -> Result<String, String> {
        progress.on_phase_start(phase, round);
        debug!(
            "{}: sending {} byte prompt to {}",
            phase,
            prompt.len(),
            self.gateway.model_name()
        );

        let result = self.gateway.generate(prompt).await;
        progress.on_phase_complete(phase, result.is_ok());

        result.map_err(|e| {
            warn!("{} failed: {}", phase, e);
            self.logger.log(ConversationEvent::new(
                event::LLM_ERROR,
                json!({ "phase": phase, "round": round, "error": e.to_string() }),
            ));
            format!("{}: {}", phase.failure_prefix(), e)
        })
    }

    fn warn_out_of_range(round: u32, name: &str, score: &RoundScore) {
        if !score.is_within_range() {
            warn!(
                "Round {}: score for {} outside 0-10 kept as given: {:?}",
                round, name, score
            );
        }
    }
}
