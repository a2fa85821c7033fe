use std::sync::Once;

use study_core::{
    update, AppState, Effect, FileHandle, IngestStats, Msg, Notification, ProgressStatus,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(study_logging::initialize_for_tests);
}

fn handle(name: &str, size: u64) -> FileHandle {
    FileHandle::new(name, size, "application/pdf")
}

#[test]
fn selected_files_are_appended_in_arrival_order() {
    init_logging();
    let handles = vec![
        handle("b-notes.pdf", 10),
        handle("a-notes.pdf", 20),
        handle("c-notes.pdf", 30),
    ];

    let (mut next, effects) = update(AppState::new(), Msg::FilesSelected(handles));
    let view = next.view();

    let names: Vec<_> = view.files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["b-notes.pdf", "a-notes.pdf", "c-notes.pdf"]);
    assert_eq!(view.file_count, 3);
    assert_eq!(view.running_count, 3);
    assert!(view.files.iter().all(|f| f.progress_percent == 0.0));
    assert!(view
        .files
        .iter()
        .all(|f| f.status == ProgressStatus::Running));
    assert!(next.consume_dirty());

    assert_eq!(
        effects,
        vec![
            Effect::StartSimulation { file_id: 1 },
            Effect::StartSimulation { file_id: 2 },
            Effect::StartSimulation { file_id: 3 },
            Effect::Notify(Notification::files_uploaded(3)),
        ]
    );
}

#[test]
fn batch_notification_reports_count() {
    init_logging();
    let (_state, effects) = update(
        AppState::new(),
        Msg::FilesSelected(vec![handle("one.pdf", 1), handle("two.pdf", 2)]),
    );

    let notifications: Vec<_> = effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::Notify(n) => Some(n.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].title, "Files uploaded");
    assert_eq!(notifications[0].description, "2 file(s) are being processed");
}

#[test]
fn ids_stay_unique_across_batches() {
    init_logging();
    let (state, _) = update(
        AppState::new(),
        Msg::FilesSelected(vec![handle("a.pdf", 1)]),
    );
    let (state, _) = update(state, Msg::RemoveClicked { file_id: 1 });
    let (state, effects) = update(state, Msg::FilesDropped(vec![handle("b.pdf", 1)]));

    assert_eq!(effects[0], Effect::StartSimulation { file_id: 2 });
    assert!(state.file(1).is_none());
    assert_eq!(state.file(2).map(|f| f.name.as_str()), Some("b.pdf"));
}

#[test]
fn empty_batch_is_ignored() {
    init_logging();
    let (mut next, effects) = update(AppState::new(), Msg::FilesSelected(Vec::new()));

    assert!(effects.is_empty());
    assert_eq!(next.view().file_count, 0);
    assert_eq!(next.view().last_ingest, None);
    assert!(!next.consume_dirty());
}

#[test]
fn record_copies_handle_metadata() {
    init_logging();
    let (state, _) = update(
        AppState::new(),
        Msg::FilesDropped(vec![FileHandle::new("scan.png", 2048, "image/png")]),
    );

    let record = state.file(1).expect("record");
    assert_eq!(record.name, "scan.png");
    assert_eq!(record.size_bytes, 2048);
    assert_eq!(record.mime_type, "image/png");
    assert_eq!(record.progress_percent, 0.0);
}

#[test]
fn oversized_files_are_skipped_and_reported() {
    init_logging();
    let limit = 1024;
    let state = AppState::new().with_max_file_bytes(Some(limit));
    let handles = vec![
        handle("small.pdf", 1024),
        handle("huge.pdf", 1025),
        handle("tiny.pdf", 1),
    ];

    let (state, effects) = update(state, Msg::FilesSelected(handles));
    let view = state.view();

    assert_eq!(view.file_count, 2);
    assert_eq!(
        view.last_ingest,
        Some(IngestStats {
            accepted: 2,
            rejected: 1
        })
    );
    assert_eq!(
        effects,
        vec![
            Effect::StartSimulation { file_id: 1 },
            Effect::StartSimulation { file_id: 2 },
            Effect::Notify(Notification::files_uploaded(2)),
            Effect::Notify(Notification::files_skipped(1, limit)),
        ]
    );
    assert_eq!(
        Notification::files_skipped(1, limit).description,
        "1 file(s) exceed the 1 KB limit"
    );
}

#[test]
fn batch_of_only_oversized_files_skips_upload_notification() {
    init_logging();
    let state = AppState::new().with_max_file_bytes(Some(10));

    let (state, effects) = update(state, Msg::FilesDropped(vec![handle("big.pdf", 11)]));

    assert_eq!(state.view().file_count, 0);
    assert_eq!(
        effects,
        vec![Effect::Notify(Notification::files_skipped(1, 10))]
    );
}

#[test]
fn default_limit_is_twenty_megabytes() {
    init_logging();
    let state = AppState::new();

    assert_eq!(state.max_file_bytes(), Some(20 * 1024 * 1024));
    assert_eq!(state.view().size_limit_label.as_deref(), Some("20 MB"));
}

#[test]
fn disabled_limit_accepts_any_size() {
    init_logging();
    let state = AppState::new().with_max_file_bytes(None);

    let (state, effects) = update(
        state,
        Msg::FilesSelected(vec![handle("archive.pdf", u64::MAX)]),
    );

    assert_eq!(state.view().file_count, 1);
    assert_eq!(state.view().size_limit_label, None);
    assert_eq!(effects.len(), 2);
}

#[test]
fn drag_state_toggles_and_drop_clears_it() {
    init_logging();
    let (mut state, effects) = update(AppState::new(), Msg::DragEntered);
    assert!(effects.is_empty());
    assert!(state.view().drag_over);
    assert!(state.consume_dirty());

    // Entering again changes nothing.
    let (mut state, _) = update(state, Msg::DragEntered);
    assert!(!state.consume_dirty());

    let (state, _) = update(state, Msg::DragLeft);
    assert!(!state.view().drag_over);

    let (state, _) = update(state, Msg::DragEntered);
    let (state, _) = update(state, Msg::FilesDropped(vec![handle("a.pdf", 5)]));
    assert!(!state.view().drag_over);
    assert_eq!(state.view().file_count, 1);
}

#[test]
fn empty_drop_still_clears_drag_state() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::DragEntered);
    let (state, effects) = update(state, Msg::FilesDropped(Vec::new()));

    assert!(effects.is_empty());
    assert!(!state.view().drag_over);
}

#[test]
fn file_list_is_shown_once_files_exist() {
    init_logging();
    let state = AppState::new();
    assert!(!state.view().shows_file_list());

    let (state, _) = update(state, Msg::FilesSelected(vec![handle("a.pdf", 5)]));
    assert!(state.view().shows_file_list());
}
