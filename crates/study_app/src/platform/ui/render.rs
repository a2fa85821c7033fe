use study_core::content::UPLOAD;
use study_core::{AppViewModel, FileRowView, ProgressStatus};

use super::constants::BAR_WIDTH;

/// Terminal rendering of the upload widget: file rows, then a status line.
pub fn render_lines(view: &AppViewModel) -> Vec<String> {
    let mut lines = Vec::with_capacity(view.files.len() + 2);
    if view.shows_file_list() {
        lines.push(UPLOAD.list_heading.to_string());
        lines.extend(view.files.iter().map(format_file_row));
    }
    lines.push(status_line(view));
    lines
}

fn format_file_row(file: &FileRowView) -> String {
    let done = match file.status {
        ProgressStatus::Complete => " done",
        ProgressStatus::Running => "",
    };
    format!(
        "  [#{id}] {icon:<11} {name} ({size}) {bar} {label}{done}",
        id = file.file_id,
        icon = file.icon.label(),
        name = file.name,
        size = file.size_label,
        bar = progress_bar(file.progress_percent),
        label = file.progress_label,
    )
}

fn progress_bar(percent: f64) -> String {
    let ratio = (percent / 100.0).clamp(0.0, 1.0);
    let filled = (ratio * BAR_WIDTH as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

fn status_line(view: &AppViewModel) -> String {
    match &view.last_ingest {
        Some(stats) => format!(
            "Files: {} | Running: {} | Last batch: accepted {}, skipped {}",
            view.file_count, view.running_count, stats.accepted, stats.rejected
        ),
        None => format!("Files: {} | Running: {}", view.file_count, view.running_count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use study_core::{update, AppState, FileHandle, Msg};

    #[test]
    fn empty_view_only_has_status() {
        let lines = render_lines(&AppState::new().view());
        assert_eq!(lines, vec!["Files: 0 | Running: 0".to_string()]);
    }

    #[test]
    fn rows_show_icon_size_bar_and_label() {
        let (state, _) = update(
            AppState::new(),
            Msg::FilesSelected(vec![
                FileHandle::new("notes.pdf", 1536, "application/pdf"),
                FileHandle::new("scan.png", 0, "image/png"),
            ]),
        );
        let (state, _) = update(
            state,
            Msg::FileProgress {
                file_id: 1,
                percent: 50.0,
            },
        );
        let (state, _) = update(state, Msg::FileCompleted { file_id: 2 });

        assert_eq!(
            render_lines(&state.view()),
            vec![
                "Processing Files".to_string(),
                "  [#1] document    notes.pdf (1.5 KB) [##########----------] 50% complete"
                    .to_string(),
                "  [#2] image       scan.png (0 Bytes) [####################] 100% complete done"
                    .to_string(),
                "Files: 2 | Running: 1 | Last batch: accepted 2, skipped 0".to_string(),
            ]
        );
    }
}
