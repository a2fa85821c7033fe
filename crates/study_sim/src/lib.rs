//! Study simulator: timer-driven progress runs with cancellation.
mod handle;
mod increment;
mod registry;
mod run;
mod sink;
mod types;

pub use handle::SimulatorHandle;
pub use increment::{FixedIncrement, IncrementSource, UniformIncrements};
pub use registry::SimulationRegistry;
pub use run::run_simulation;
pub use sink::{ChannelProgressSink, ProgressSink};
pub use types::{FileId, RunOutcome, SimError, SimEvent, SimulatorSettings};
