use std::sync::{mpsc, Arc};
use std::thread;

use study_logging::{study_debug, study_info, study_warn};
use tokio_util::sync::CancellationToken;

use crate::run::run_simulation;
use crate::{
    ChannelProgressSink, FileId, IncrementSource, ProgressSink, RunOutcome, SimError, SimEvent,
    SimulationRegistry, SimulatorSettings, UniformIncrements,
};

enum SimCommand {
    Start {
        file_id: FileId,
        token: CancellationToken,
    },
}

/// Owns the simulator runtime thread. Dropping the handle cancels every run.
pub struct SimulatorHandle {
    cmd_tx: mpsc::Sender<SimCommand>,
    registry: SimulationRegistry,
}

impl SimulatorHandle {
    /// Uniform random increments, events delivered on the returned channel.
    pub fn new(settings: SimulatorSettings) -> Result<(Self, mpsc::Receiver<SimEvent>), SimError> {
        let source = UniformIncrements::new(settings.max_increment)?;
        Self::channel(settings, Arc::new(source))
    }

    pub fn channel(
        settings: SimulatorSettings,
        source: Arc<dyn IncrementSource>,
    ) -> Result<(Self, mpsc::Receiver<SimEvent>), SimError> {
        let (event_tx, event_rx) = mpsc::channel();
        let sink = Arc::new(ChannelProgressSink::new(event_tx));
        let handle = Self::spawn(settings, source, sink)?;
        Ok((handle, event_rx))
    }

    pub fn spawn(
        settings: SimulatorSettings,
        source: Arc<dyn IncrementSource>,
        sink: Arc<dyn ProgressSink>,
    ) -> Result<Self, SimError> {
        settings.validate()?;

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("study-sim")
            .enable_time()
            .build()?;
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let registry = SimulationRegistry::new();
        let task_registry = registry.clone();
        let tick_interval = settings.tick_interval;

        thread::Builder::new()
            .name("study-sim-dispatch".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    match command {
                        SimCommand::Start { file_id, token } => {
                            let source = source.clone();
                            let sink = sink.clone();
                            let registry = task_registry.clone();
                            runtime.spawn(async move {
                                let outcome = run_simulation(
                                    file_id,
                                    tick_interval,
                                    source.as_ref(),
                                    sink.as_ref(),
                                    token,
                                )
                                .await;
                                if outcome == RunOutcome::Completed {
                                    registry.finish(file_id);
                                }
                            });
                        }
                    }
                }
                let cancelled = task_registry.cancel_all();
                study_info!("simulator shutting down, cancelled {} running", cancelled);
            })?;

        study_debug!(
            "simulator started tick_interval={:?} max_increment={}",
            settings.tick_interval,
            settings.max_increment
        );
        Ok(Self { cmd_tx, registry })
    }

    /// Starts a run for `file_id` and returns its cancellation token.
    pub fn start(&self, file_id: FileId) -> CancellationToken {
        let token = self.registry.register(file_id);
        let command = SimCommand::Start {
            file_id,
            token: token.clone(),
        };
        if self.cmd_tx.send(command).is_err() {
            study_warn!("simulator stopped; file_id={} will not progress", file_id);
            self.registry.cancel(file_id);
        }
        token
    }

    pub fn cancel(&self, file_id: FileId) -> bool {
        self.registry.cancel(file_id)
    }

    pub fn is_active(&self, file_id: FileId) -> bool {
        self.registry.is_active(file_id)
    }

    pub fn active_count(&self) -> usize {
        self.registry.active_count()
    }
}
