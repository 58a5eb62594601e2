//! Archive Debate use case
//!
//! Turns a finished debate plus its verdict into a [`DebateRecordBlob`]
//! and hands it to the [`RecordStore`]. Also the read side: listing keys
//! and loading records back.

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger, event,
};
use crate::ports::record_store::{RecordStore, StoreError};
use chrono::Utc;
use debate_domain::{DebateRecordBlob, DebateState, DomainError, RecordKey};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub struct ArchiveDebateUseCase<S: RecordStore + ?Sized> {
    store: Arc<S>,
    logger: Arc<dyn ConversationLogger>,
}

impl<S: RecordStore + ?Sized> ArchiveDebateUseCase<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Build the record for a finished debate and persist it.
    ///
    /// Saving the same debate twice produces two records. A store failure is
    /// returned to the caller; the debate state is never touched.
    pub fn save(&self, state: &DebateState, verdict: &str) -> Result<RecordKey, ArchiveError> {
        let blob = DebateRecordBlob::from_state(state, verdict, Utc::now())?;
        let key = self.store.save(&blob).inspect_err(|e| {
            warn!("Failed to save debate record: {}", e);
        })?;

        info!("Saved debate record {}", key);
        self.logger.log(ConversationEvent::new(
            event::RECORD_SAVED,
            json!({ "key": key.to_string(), "rounds": blob.rounds }),
        ));
        Ok(key)
    }

    /// Stored keys, most recent first
    pub fn list(&self) -> Result<Vec<RecordKey>, ArchiveError> {
        Ok(self.store.list()?)
    }

    pub fn load(&self, key: &RecordKey) -> Result<DebateRecordBlob, ArchiveError> {
        Ok(self.store.load(key)?)
    }

    /// Parse a user-supplied key and load it
    pub fn load_by_name(&self, key: &str) -> Result<(RecordKey, DebateRecordBlob), ArchiveError> {
        let key: RecordKey = key.parse()?;
        let blob = self.load(&key)?;
        Ok((key, blob))
    }

    /// The most recent record, if any
    pub fn latest(&self) -> Result<Option<(RecordKey, DebateRecordBlob)>, ArchiveError> {
        match self.list()?.into_iter().next() {
            Some(key) => {
                let blob = self.load(&key)?;
                Ok(Some((key, blob)))
            }
            None => Ok(None),
        }
    }
}
