use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio_util::sync::CancellationToken;

use crate::FileId;

/// Cancellation tokens of the simulations that are still running.
#[derive(Debug, Clone, Default)]
pub struct SimulationRegistry {
    tokens: Arc<Mutex<HashMap<FileId, CancellationToken>>>,
}

impl SimulationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a fresh token for `file_id`, cancelling any previous one.
    pub fn register(&self, file_id: FileId) -> CancellationToken {
        let token = CancellationToken::new();
        if let Some(previous) = self.lock().insert(file_id, token.clone()) {
            previous.cancel();
        }
        token
    }

    /// Cancels and forgets the simulation for `file_id`. Returns false if none was running.
    pub fn cancel(&self, file_id: FileId) -> bool {
        match self.lock().remove(&file_id) {
            Some(token) => {
                token.cancel();
                true
            }
            None => false,
        }
    }

    pub fn cancel_all(&self) -> usize {
        let drained: Vec<_> = self.lock().drain().collect();
        for (_, token) in &drained {
            token.cancel();
        }
        drained.len()
    }

    pub fn is_active(&self, file_id: FileId) -> bool {
        self.lock().contains_key(&file_id)
    }

    pub fn active_count(&self) -> usize {
        self.lock().len()
    }

    /// Forgets a simulation that ran to completion.
    pub(crate) fn finish(&self, file_id: FileId) {
        self.lock().remove(&file_id);
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<FileId, CancellationToken>> {
        self.tokens.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
