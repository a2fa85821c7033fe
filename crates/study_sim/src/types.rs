use std::io;
use std::time::Duration;

use thiserror::Error;

pub type FileId = u64;

#[derive(Debug, Clone, PartialEq)]
pub enum SimEvent {
    /// Absolute progress after a tick, clamped to 100.
    Progress { file_id: FileId, percent: f64 },
    Completed { file_id: FileId },
}

impl SimEvent {
    pub fn file_id(&self) -> FileId {
        match self {
            SimEvent::Progress { file_id, .. } | SimEvent::Completed { file_id } => *file_id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulatorSettings {
    pub tick_interval: Duration,
    /// Upper bound (exclusive) of the random per-tick increment, in percent.
    pub max_increment: f64,
}

impl Default for SimulatorSettings {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(300),
            max_increment: 30.0,
        }
    }
}

impl SimulatorSettings {
    pub fn validate(&self) -> Result<(), SimError> {
        if self.tick_interval.is_zero() {
            return Err(SimError::InvalidSettings(
                "tick interval must be greater than zero".into(),
            ));
        }
        if !self.max_increment.is_finite() || self.max_increment <= 0.0 {
            return Err(SimError::InvalidSettings(format!(
                "max increment must be a positive number, got {}",
                self.max_increment
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid simulator settings: {0}")]
    InvalidSettings(String),
    #[error("failed to start simulator runtime: {0}")]
    Runtime(#[from] io::Error),
}
