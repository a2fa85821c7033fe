use crate::{FileId, IngestStats, ProgressStatus};

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
const SIZE_BASE: u64 = 1024;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    pub drag_over: bool,
    pub file_count: usize,
    pub running_count: usize,
    pub files: Vec<FileRowView>,
    pub last_ingest: Option<IngestStats>,
    /// Human-readable per-file limit, when one is enforced.
    pub size_limit_label: Option<String>,
    pub dirty: bool,
}

impl AppViewModel {
    /// The "Processing Files" list is only shown once something was ingested.
    pub fn shows_file_list(&self) -> bool {
        !self.files.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FileRowView {
    pub file_id: FileId,
    pub name: String,
    pub size_label: String,
    pub icon: FileIcon,
    pub progress_percent: f64,
    pub progress_label: String,
    pub status: ProgressStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileIcon {
    Image,
    Spreadsheet,
    Document,
}

impl FileIcon {
    pub fn classify(mime_type: &str) -> Self {
        if mime_type.contains("image") {
            FileIcon::Image
        } else if mime_type.contains("spreadsheet") || mime_type.contains("excel") {
            FileIcon::Spreadsheet
        } else {
            FileIcon::Document
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FileIcon::Image => "image",
            FileIcon::Spreadsheet => "spreadsheet",
            FileIcon::Document => "document",
        }
    }
}

/// Formats a byte count with base-1024 units and at most two decimals.
///
/// `0` renders as `"0 Bytes"`; anything past the gigabyte range stays in GB.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut unit = 0;
    let mut divisor = 1u64;
    while unit + 1 < SIZE_UNITS.len() && bytes >= divisor * SIZE_BASE {
        divisor *= SIZE_BASE;
        unit += 1;
    }

    let scaled = bytes as f64 / divisor as f64;
    format!("{} {}", trim_decimals(scaled), SIZE_UNITS[unit])
}

fn trim_decimals(value: f64) -> String {
    let fixed = format!("{value:.2}");
    fixed
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
