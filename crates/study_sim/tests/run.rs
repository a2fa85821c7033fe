use std::sync::{Arc, Mutex};
use std::time::Duration;

use study_sim::{
    run_simulation, FixedIncrement, IncrementSource, ProgressSink, RunOutcome, SimEvent,
    UniformIncrements,
};
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

const TICK: Duration = Duration::from_millis(300);

#[derive(Default)]
struct TestSink {
    events: Mutex<Vec<SimEvent>>,
}

impl TestSink {
    fn take(&self) -> Vec<SimEvent> {
        self.events.lock().unwrap().drain(..).collect()
    }
}

impl ProgressSink for TestSink {
    fn emit(&self, event: SimEvent) {
        self.events.lock().unwrap().push(event);
    }
}

fn percents(events: &[SimEvent]) -> Vec<f64> {
    events
        .iter()
        .filter_map(|event| match event {
            SimEvent::Progress { percent, .. } => Some(*percent),
            SimEvent::Completed { .. } => None,
        })
        .collect()
}

#[tokio::test(start_paused = true)]
async fn fixed_increment_completes_in_exact_ticks() {
    let sink = TestSink::default();
    let start = Instant::now();

    let outcome = run_simulation(
        4,
        TICK,
        &FixedIncrement(25.0),
        &sink,
        CancellationToken::new(),
    )
    .await;

    assert_eq!(outcome, RunOutcome::Completed);
    assert_eq!(
        sink.take(),
        vec![
            SimEvent::Progress {
                file_id: 4,
                percent: 25.0
            },
            SimEvent::Progress {
                file_id: 4,
                percent: 50.0
            },
            SimEvent::Progress {
                file_id: 4,
                percent: 75.0
            },
            SimEvent::Progress {
                file_id: 4,
                percent: 100.0
            },
            SimEvent::Completed { file_id: 4 },
        ]
    );
    // First tick waits a full interval, like a browser interval timer.
    let elapsed = start.elapsed();
    assert!(elapsed >= TICK * 4, "{elapsed:?}");
    assert!(elapsed < TICK * 4 + Duration::from_millis(10), "{elapsed:?}");
}

#[tokio::test(start_paused = true)]
async fn overshoot_is_clamped_to_one_hundred() {
    let sink = TestSink::default();

    let outcome = run_simulation(
        1,
        TICK,
        &FixedIncrement(30.0),
        &sink,
        CancellationToken::new(),
    )
    .await;

    let events = sink.take();
    assert_eq!(outcome, RunOutcome::Completed);
    assert_eq!(percents(&events), vec![30.0, 60.0, 90.0, 100.0]);
    assert_eq!(events.last(), Some(&SimEvent::Completed { file_id: 1 }));
}

#[tokio::test(start_paused = true)]
async fn random_increments_are_monotonic_and_finish() {
    let sink = TestSink::default();
    let source = UniformIncrements::new(30.0).unwrap();

    let outcome = run_simulation(2, TICK, &source, &sink, CancellationToken::new()).await;

    let values = percents(&sink.take());
    assert_eq!(outcome, RunOutcome::Completed);
    assert!(values.windows(2).all(|pair| pair[0] <= pair[1]), "{values:?}");
    assert_eq!(values.last(), Some(&100.0));
    assert!(values.iter().all(|p| (0.0..=100.0).contains(p)));
}

#[tokio::test(start_paused = true)]
async fn cancelled_before_first_tick_emits_nothing() {
    let sink = TestSink::default();
    let token = CancellationToken::new();
    token.cancel();

    let outcome = run_simulation(3, TICK, &FixedIncrement(50.0), &sink, token).await;

    assert_eq!(outcome, RunOutcome::Cancelled);
    assert!(sink.take().is_empty());
}

#[tokio::test(start_paused = true)]
async fn cancellation_stops_a_running_simulation() {
    let sink = Arc::new(TestSink::default());
    let token = CancellationToken::new();

    let task = {
        let sink = sink.clone();
        let token = token.clone();
        tokio::spawn(async move {
            run_simulation(9, TICK, &FixedIncrement(10.0), sink.as_ref(), token).await
        })
    };

    // Two ticks land at 300ms and 600ms.
    tokio::time::sleep(Duration::from_millis(650)).await;
    token.cancel();
    let outcome = task.await.unwrap();

    assert_eq!(outcome, RunOutcome::Cancelled);
    assert_eq!(percents(&sink.take()), vec![10.0, 20.0]);

    tokio::time::sleep(TICK * 5).await;
    assert!(sink.take().is_empty());
}

struct BrokenSource;

impl IncrementSource for BrokenSource {
    fn next_increment(&self) -> f64 {
        f64::NAN
    }
}

#[tokio::test(start_paused = true)]
async fn invalid_increments_never_move_progress_backwards() {
    let sink = Arc::new(TestSink::default());
    let token = CancellationToken::new();

    let task = {
        let sink = sink.clone();
        let token = token.clone();
        tokio::spawn(async move {
            run_simulation(5, TICK, &FixedIncrement(-5.0), sink.as_ref(), token).await
        })
    };
    tokio::time::sleep(TICK * 3 + Duration::from_millis(10)).await;
    token.cancel();
    assert_eq!(task.await.unwrap(), RunOutcome::Cancelled);
    assert_eq!(percents(&sink.take()), vec![0.0, 0.0, 0.0]);

    let token = CancellationToken::new();
    let task = {
        let sink = sink.clone();
        let token = token.clone();
        tokio::spawn(async move {
            run_simulation(6, TICK, &BrokenSource, sink.as_ref(), token).await
        })
    };
    tokio::time::sleep(TICK * 2 + Duration::from_millis(10)).await;
    token.cancel();
    assert_eq!(task.await.unwrap(), RunOutcome::Cancelled);
    assert_eq!(percents(&sink.take()), vec![0.0, 0.0]);
}

#[test]
fn uniform_increments_stay_in_range() {
    let source = UniformIncrements::new(30.0).unwrap();
    for _ in 0..1_000 {
        let step = source.next_increment();
        assert!((0.0..30.0).contains(&step), "{step}");
    }
}

#[test]
fn uniform_increments_reject_empty_range() {
    assert!(UniformIncrements::new(0.0).is_err());
    assert!(UniformIncrements::new(-1.0).is_err());
    assert!(UniformIncrements::new(f64::INFINITY).is_err());
}
