use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use study_core::{update, AppState, Msg};
use study_logging::{study_debug, study_info};

use super::commands;
use super::config::AppConfig;
use super::effects::EffectRunner;
use super::intake::{collect_handles, IntakeMode};
use super::toast::TerminalToasts;
use super::ui;

/// Background tick used to coalesce terminal rendering.
const RENDER_INTERVAL: Duration = Duration::from_millis(75);

#[derive(Debug)]
pub enum AppEvent {
    Msg(Msg),
    /// Stdin reached EOF; exit once nothing is running.
    InputClosed,
    QuitRequested,
}

pub struct IngestRequest {
    pub paths: Vec<PathBuf>,
    pub mode: IntakeMode,
    pub interactive: bool,
}

/// Owns the state container and applies every message through `update`.
pub struct App<W: Write> {
    state: AppState,
    effects: EffectRunner,
    out: W,
    needs_render: bool,
}

impl<W: Write> App<W> {
    pub fn new(state: AppState, effects: EffectRunner, out: W) -> Self {
        Self {
            state,
            effects,
            out,
            needs_render: true,
        }
    }

    pub fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        if state.consume_dirty() {
            self.needs_render = true;
        }
        self.state = state;
        self.effects.run(effects);
    }

    pub fn render_if_needed(&mut self) -> io::Result<()> {
        if !self.needs_render {
            return Ok(());
        }
        for line in ui::render::render_lines(&self.state.view()) {
            writeln!(self.out, "{line}")?;
        }
        self.out.flush()?;
        self.needs_render = false;
        Ok(())
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn running_count(&self) -> usize {
        self.state.running_count()
    }
}

pub fn run_ingest(config: &AppConfig, request: IngestRequest) -> anyhow::Result<()> {
    let settings = config.simulator_settings()?;
    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    let effects = EffectRunner::new(settings, event_tx.clone(), Box::new(TerminalToasts))
        .context("starting progress simulator")?;
    let state = AppState::new().with_max_file_bytes(config.max_file_bytes);
    let mut app = App::new(state, effects, io::stdout());

    let batch = collect_handles(&request.paths, request.mode);
    study_info!(
        "Ingest mode={:?} handles={} filtered={} failed={}",
        batch.mode,
        batch.handles.len(),
        batch.filtered,
        batch.failed
    );
    app.dispatch(batch.into_msg());

    spawn_ticker(event_tx.clone());
    if request.interactive {
        commands::spawn_stdin_reader(event_tx.clone());
    }
    drop(event_tx);

    let mut input_open = request.interactive;
    loop {
        if !input_open && app.running_count() == 0 {
            break;
        }
        let Ok(event) = event_rx.recv() else {
            break;
        };
        match event {
            AppEvent::Msg(Msg::Tick) => app.render_if_needed()?,
            AppEvent::Msg(msg) => app.dispatch(msg),
            AppEvent::InputClosed => input_open = false,
            AppEvent::QuitRequested => break,
        }
    }
    app.render_if_needed()?;

    study_info!(
        "Ingest finished files={} running={} active_simulations={}",
        app.state().file_count(),
        app.running_count(),
        app.effects.active_simulations()
    );
    Ok(())
}

fn spawn_ticker(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        while tx.send(AppEvent::Msg(Msg::Tick)).is_ok() {
            thread::sleep(RENDER_INTERVAL);
        }
    });
}

/// Writes the composed landing page, listing `files` in the upload widget at 0%.
pub fn write_page(config: &AppConfig, out: &Path, files: &[PathBuf]) -> anyhow::Result<()> {
    let state = AppState::new().with_max_file_bytes(config.max_file_bytes);
    let batch = collect_handles(files, IntakeMode::Picker);
    // A static snapshot: simulations are never started for the page.
    let (state, effects) = update(state, batch.into_msg());
    study_debug!("Page snapshot ignores {} effects", effects.len());

    let html = ui::page::compose_page(&state.view());
    fs::write(out, html).with_context(|| format!("writing page to {}", out.display()))?;
    study_info!("Wrote landing page to {:?}", out);
    println!("Wrote {}", out.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use std::time::Instant;

    use study_core::{FileHandle, Notification, ProgressStatus};
    use study_sim::{FixedIncrement, SimulatorSettings};
    use tempfile::TempDir;

    use crate::platform::toast::NotificationSink;

    #[derive(Clone, Default)]
    struct RecordingToasts {
        received: Arc<Mutex<Vec<Notification>>>,
    }

    impl RecordingToasts {
        fn take(&self) -> Vec<Notification> {
            self.received.lock().unwrap().drain(..).collect()
        }
    }

    impl NotificationSink for RecordingToasts {
        fn notify(&self, title: &str, description: &str) {
            self.received
                .lock()
                .unwrap()
                .push(Notification::new(title, description));
        }
    }

    fn test_app(
        increment: f64,
        tick_ms: u64,
    ) -> (App<Vec<u8>>, mpsc::Receiver<AppEvent>, RecordingToasts) {
        let settings = SimulatorSettings {
            tick_interval: Duration::from_millis(tick_ms),
            ..SimulatorSettings::default()
        };
        let toasts = RecordingToasts::default();
        let (tx, rx) = mpsc::channel();
        let effects = EffectRunner::with_source(
            settings,
            Arc::new(FixedIncrement(increment)),
            tx,
            Box::new(toasts.clone()),
        )
        .unwrap();
        (App::new(AppState::new(), effects, Vec::new()), rx, toasts)
    }

    fn pump_until(
        app: &mut App<Vec<u8>>,
        rx: &mpsc::Receiver<AppEvent>,
        timeout: Duration,
        mut done: impl FnMut(&App<Vec<u8>>) -> bool,
    ) {
        let deadline = Instant::now() + timeout;
        while !done(app) {
            let remaining = deadline.saturating_duration_since(Instant::now());
            assert!(!remaining.is_zero(), "timed out waiting for app state");
            if let Ok(AppEvent::Msg(msg)) = rx.recv_timeout(remaining) {
                app.dispatch(msg);
            }
        }
    }

    #[test]
    fn two_files_complete_with_three_notifications() {
        let (mut app, rx, toasts) = test_app(40.0, 5);

        app.dispatch(Msg::FilesSelected(vec![
            FileHandle::new("small.pdf", 500, "application/pdf"),
            FileHandle::new("large.pdf", 2_000_000, "application/pdf"),
        ]));
        let view = app.state().view();
        assert_eq!(view.file_count, 2);
        assert!(view.files.iter().all(|f| f.progress_percent == 0.0));

        pump_until(&mut app, &rx, Duration::from_secs(5), |app| {
            app.running_count() == 0
        });

        let view = app.state().view();
        assert!(view
            .files
            .iter()
            .all(|f| f.progress_percent == 100.0 && f.status == ProgressStatus::Complete));
        assert_eq!(
            toasts.take(),
            vec![
                Notification::files_uploaded(2),
                Notification::processing_complete(),
                Notification::processing_complete(),
            ]
        );
    }

    #[test]
    fn removing_a_running_file_cancels_its_timer() {
        let (mut app, rx, toasts) = test_app(1.0, 10);

        app.dispatch(Msg::FilesDropped(vec![FileHandle::new(
            "slow.pdf",
            10,
            "application/pdf",
        )]));
        pump_until(&mut app, &rx, Duration::from_secs(5), |app| {
            app.state()
                .file(1)
                .is_some_and(|file| file.progress_percent > 0.0)
        });
        assert_eq!(app.effects.active_simulations(), 1);

        app.dispatch(Msg::RemoveClicked { file_id: 1 });

        assert!(app.state().file(1).is_none());
        assert_eq!(app.effects.active_simulations(), 0);
        thread::sleep(Duration::from_millis(50));
        while let Ok(AppEvent::Msg(msg)) = rx.try_recv() {
            app.dispatch(msg);
        }
        assert_eq!(app.state().file_count(), 0);
        assert_eq!(toasts.take(), vec![Notification::files_uploaded(1)]);
    }

    #[test]
    fn render_writes_rows_once_per_change() {
        let (mut app, _rx, _toasts) = test_app(50.0, 1_000);

        app.render_if_needed().unwrap();
        app.render_if_needed().unwrap();
        app.dispatch(Msg::FilesSelected(vec![FileHandle::new(
            "a.pdf",
            1024,
            "application/pdf",
        )]));
        app.render_if_needed().unwrap();

        let printed = String::from_utf8(app.out.clone()).unwrap();
        let lines: Vec<_> = printed.lines().collect();
        assert_eq!(lines[0], "Files: 0 | Running: 0");
        assert_eq!(lines[1], "Processing Files");
        assert!(lines[2].contains("a.pdf (1 KB)"));
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn page_snapshot_lists_requested_files() {
        let dir = TempDir::new().unwrap();
        let doc = dir.path().join("chapter.docx");
        fs::write(&doc, vec![0u8; 1536]).unwrap();
        let out = dir.path().join("landing.html");

        write_page(&AppConfig::default(), &out, &[doc]).unwrap();

        let html = fs::read_to_string(&out).unwrap();
        assert!(html.contains("chapter.docx"));
        assert!(html.contains("<span>1.5 KB</span>"));
        assert!(html.contains("<span>0% complete</span>"));
    }
}
