use crate::{AppState, Effect, FileHandle, Msg, Notification, ProgressStatus};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::FilesSelected(handles) => ingest(&mut state, handles),
        Msg::FilesDropped(handles) => {
            state.set_drag_over(false);
            ingest(&mut state, handles)
        }
        Msg::DragEntered => {
            state.set_drag_over(true);
            Vec::new()
        }
        Msg::DragLeft => {
            state.set_drag_over(false);
            Vec::new()
        }
        Msg::RemoveClicked { file_id } => match state.remove(file_id) {
            // Cancel before the simulator gets another tick in for a discarded record.
            Some(record) if record.status == ProgressStatus::Running => {
                vec![Effect::CancelSimulation { file_id }]
            }
            _ => Vec::new(),
        },
        Msg::FileProgress { file_id, percent } => {
            state.apply_progress(file_id, percent);
            Vec::new()
        }
        Msg::FileCompleted { file_id } => {
            if state.apply_complete(file_id) {
                vec![Effect::Notify(Notification::processing_complete())]
            } else {
                Vec::new()
            }
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn ingest(state: &mut AppState, handles: Vec<FileHandle>) -> Vec<Effect> {
    if handles.is_empty() {
        return Vec::new();
    }

    let (accepted, stats) = state.ingest(handles);
    let mut effects = Vec::with_capacity(accepted.len() + 2);
    effects.extend(
        accepted
            .into_iter()
            .map(|file_id| Effect::StartSimulation { file_id }),
    );
    if stats.accepted > 0 {
        effects.push(Effect::Notify(Notification::files_uploaded(stats.accepted)));
    }
    if stats.rejected > 0 {
        if let Some(limit) = state.max_file_bytes() {
            effects.push(Effect::Notify(Notification::files_skipped(
                stats.rejected,
                limit,
            )));
        }
    }
    effects
}
