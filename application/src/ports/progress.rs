//! Progress notification port
//!
//! Defines the interface for reporting progress while a debate waits on
//! the model.

use debate_domain::DebatePhase;

/// Callback for progress updates during a debate
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain text, nothing).
pub trait ProgressNotifier: Send + Sync {
    /// Called before the model call of a phase; `round` is set for analyses
    fn on_phase_start(&self, phase: DebatePhase, round: Option<u32>);

    /// Called once the model call returned
    fn on_phase_complete(&self, phase: DebatePhase, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_phase_start(&self, _phase: DebatePhase, _round: Option<u32>) {}
    fn on_phase_complete(&self, _phase: DebatePhase, _success: bool) {}
}
