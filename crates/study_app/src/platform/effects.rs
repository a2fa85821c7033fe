use std::sync::{mpsc, Arc};

use study_core::{Effect, Msg};
use study_logging::{study_debug, study_info};
use study_sim::{
    IncrementSource, ProgressSink, SimError, SimEvent, SimulatorHandle, SimulatorSettings,
    UniformIncrements,
};

use super::app::AppEvent;
use super::toast::NotificationSink;

pub struct EffectRunner {
    simulator: SimulatorHandle,
    notifier: Box<dyn NotificationSink>,
}

impl EffectRunner {
    pub fn new(
        settings: SimulatorSettings,
        event_tx: mpsc::Sender<AppEvent>,
        notifier: Box<dyn NotificationSink>,
    ) -> Result<Self, SimError> {
        let source = UniformIncrements::new(settings.max_increment)?;
        Self::with_source(settings, Arc::new(source), event_tx, notifier)
    }

    pub fn with_source(
        settings: SimulatorSettings,
        source: Arc<dyn IncrementSource>,
        event_tx: mpsc::Sender<AppEvent>,
        notifier: Box<dyn NotificationSink>,
    ) -> Result<Self, SimError> {
        let sink = Arc::new(MsgForwarder { tx: event_tx });
        let simulator = SimulatorHandle::spawn(settings, source, sink)?;
        Ok(Self {
            simulator,
            notifier,
        })
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::StartSimulation { file_id } => {
                    study_info!("StartSimulation file_id={}", file_id);
                    self.simulator.start(file_id);
                }
                Effect::CancelSimulation { file_id } => {
                    let cancelled = self.simulator.cancel(file_id);
                    study_debug!(
                        "CancelSimulation file_id={} was_running={}",
                        file_id,
                        cancelled
                    );
                }
                Effect::Notify(notification) => {
                    self.notifier
                        .notify(&notification.title, &notification.description);
                }
            }
        }
    }

    pub fn active_simulations(&self) -> usize {
        self.simulator.active_count()
    }
}

/// Feeds simulator events back into the app loop as messages.
struct MsgForwarder {
    tx: mpsc::Sender<AppEvent>,
}

impl ProgressSink for MsgForwarder {
    fn emit(&self, event: SimEvent) {
        let msg = match event {
            SimEvent::Progress { file_id, percent } => Msg::FileProgress { file_id, percent },
            SimEvent::Completed { file_id } => Msg::FileCompleted { file_id },
        };
        let _ = self.tx.send(AppEvent::Msg(msg));
    }
}
