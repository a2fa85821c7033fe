use std::time::Duration;

use study_logging::{study_debug, study_trace};
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::{FileId, IncrementSource, ProgressSink, RunOutcome, SimEvent};

const COMPLETE: f64 = 100.0;

/// Drives one file from 0% to 100%, one increment per tick.
///
/// The first tick fires one full interval after the call. Reaching 100 emits a
/// final `Progress` at exactly 100 followed by `Completed`. Cancellation is
/// checked before every tick and stops the run without emitting anything else.
pub async fn run_simulation(
    file_id: FileId,
    tick_interval: Duration,
    source: &dyn IncrementSource,
    sink: &dyn ProgressSink,
    cancel: CancellationToken,
) -> RunOutcome {
    let mut ticker = interval_at(Instant::now() + tick_interval, tick_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut percent = 0.0_f64;
    let mut ticks = 0_u64;
    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                study_debug!("simulation file_id={} cancelled after {} ticks", file_id, ticks);
                return RunOutcome::Cancelled;
            }
            _ = ticker.tick() => {}
        }

        ticks += 1;
        // f64::max drops NaN, so a broken source can stall progress but never reverse it.
        percent += source.next_increment().max(0.0);
        if percent >= COMPLETE {
            sink.emit(SimEvent::Progress {
                file_id,
                percent: COMPLETE,
            });
            sink.emit(SimEvent::Completed { file_id });
            study_debug!("simulation file_id={} completed after {} ticks", file_id, ticks);
            return RunOutcome::Completed;
        }

        study_trace!("simulation file_id={} tick={} percent={:.1}", file_id, ticks, percent);
        sink.emit(SimEvent::Progress { file_id, percent });
    }
}
