use rand::Rng;

use crate::SimError;

/// Produces the percentage added on each simulator tick.
pub trait IncrementSource: Send + Sync {
    fn next_increment(&self) -> f64;
}

/// Uniform draws in `[0, max)`, the production behaviour.
#[derive(Debug, Clone, Copy)]
pub struct UniformIncrements {
    max: f64,
}

impl UniformIncrements {
    pub fn new(max: f64) -> Result<Self, SimError> {
        if !max.is_finite() || max <= 0.0 {
            return Err(SimError::InvalidSettings(format!(
                "increment range must be positive, got {max}"
            )));
        }
        Ok(Self { max })
    }

    pub fn max(&self) -> f64 {
        self.max
    }
}

impl IncrementSource for UniformIncrements {
    fn next_increment(&self) -> f64 {
        rand::thread_rng().gen_range(0.0..self.max)
    }
}

/// Deterministic step, useful for tests and demos.
#[derive(Debug, Clone, Copy)]
pub struct FixedIncrement(pub f64);

impl IncrementSource for FixedIncrement {
    fn next_increment(&self) -> f64 {
        self.0
    }
}
