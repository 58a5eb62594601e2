//! Resume Session use case
//!
//! Checkpoints the live debate after each transition and picks it back up
//! on the next start.

use crate::ports::record_store::StoreError;
use crate::ports::session_store::{SessionSnapshot, SessionStore};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct ResumeSessionUseCase<S: SessionStore + ?Sized> {
    store: Arc<S>,
}

impl<S: SessionStore + ?Sized> ResumeSessionUseCase<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Load the saved session.
    ///
    /// A snapshot whose totals, round order or counter don't add up is
    /// discarded and `None` returned.
    pub fn resume(&self) -> Result<Option<SessionSnapshot>, StoreError> {
        let Some(snapshot) = self.store.load()? else {
            debug!("No saved session");
            return Ok(None);
        };

        if !snapshot.state.is_consistent() {
            warn!("Saved session is inconsistent, discarding it");
            self.store.clear()?;
            return Ok(None);
        }

        info!(
            "Resuming debate on '{}' at round {} ({} completed)",
            snapshot.state.config().topic(),
            snapshot.state.current_round(),
            snapshot.state.rounds_completed()
        );
        Ok(Some(snapshot))
    }

    pub fn checkpoint(&self, snapshot: &SessionSnapshot) -> Result<(), StoreError> {
        debug!(
            "Checkpointing session at round {}",
            snapshot.state.current_round()
        );
        self.store.save(snapshot)
    }

    pub fn discard(&self) -> Result<(), StoreError> {
        self.store.clear()
    }
}
