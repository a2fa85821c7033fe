use std::collections::BTreeMap;

use crate::intake::DEFAULT_MAX_FILE_BYTES;
use crate::view_model::{format_file_size, AppViewModel, FileIcon, FileRowView};

pub type FileId = u64;

/// Metadata of a picked or dropped file. Content is never read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHandle {
    pub name: String,
    pub size_bytes: u64,
    pub mime_type: String,
}

impl FileHandle {
    pub fn new(name: impl Into<String>, size_bytes: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            mime_type: mime_type.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProgressStatus {
    #[default]
    Running,
    Complete,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FileRecord {
    pub id: FileId,
    pub name: String,
    pub size_bytes: u64,
    pub mime_type: String,
    pub progress_percent: f64,
    pub status: ProgressStatus,
}

impl FileRecord {
    fn from_handle(id: FileId, handle: FileHandle) -> Self {
        Self {
            id,
            name: handle.name,
            size_bytes: handle.size_bytes,
            mime_type: handle.mime_type,
            progress_percent: 0.0,
            status: ProgressStatus::Running,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IngestStats {
    pub accepted: usize,
    pub rejected: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    files: BTreeMap<FileId, FileRecord>,
    next_file_id: FileId,
    drag_over: bool,
    last_ingest: Option<IngestStats>,
    max_file_bytes: Option<u64>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            files: BTreeMap::new(),
            next_file_id: 1,
            drag_over: false,
            last_ingest: None,
            max_file_bytes: Some(DEFAULT_MAX_FILE_BYTES),
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the per-file size limit. `None` accepts any size.
    pub fn with_max_file_bytes(mut self, limit: Option<u64>) -> Self {
        self.max_file_bytes = limit;
        self
    }

    pub fn max_file_bytes(&self) -> Option<u64> {
        self.max_file_bytes
    }

    pub fn file(&self, file_id: FileId) -> Option<&FileRecord> {
        self.files.get(&file_id)
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn running_count(&self) -> usize {
        self.files
            .values()
            .filter(|file| file.status == ProgressStatus::Running)
            .count()
    }

    pub fn view(&self) -> AppViewModel {
        let files: Vec<FileRowView> = self.files.values().map(row_view).collect();
        AppViewModel {
            drag_over: self.drag_over,
            file_count: files.len(),
            running_count: self.running_count(),
            files,
            last_ingest: self.last_ingest,
            size_limit_label: self.max_file_bytes.map(format_file_size),
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_drag_over(&mut self, drag_over: bool) {
        if self.drag_over != drag_over {
            self.drag_over = drag_over;
            self.dirty = true;
        }
    }

    /// Appends a record per handle within the size limit, in arrival order.
    pub(crate) fn ingest(&mut self, handles: Vec<FileHandle>) -> (Vec<FileId>, IngestStats) {
        let mut accepted = Vec::with_capacity(handles.len());
        let mut rejected = 0;
        for handle in handles {
            if self.exceeds_limit(handle.size_bytes) {
                rejected += 1;
                continue;
            }
            let id = self.next_file_id;
            self.next_file_id += 1;
            self.files.insert(id, FileRecord::from_handle(id, handle));
            accepted.push(id);
        }
        let stats = IngestStats {
            accepted: accepted.len(),
            rejected,
        };
        self.last_ingest = Some(stats);
        self.dirty = true;
        (accepted, stats)
    }

    pub(crate) fn remove(&mut self, file_id: FileId) -> Option<FileRecord> {
        let removed = self.files.remove(&file_id);
        if removed.is_some() {
            self.dirty = true;
        }
        removed
    }

    /// Raises the stored percentage; lower, non-finite or late values are ignored.
    pub(crate) fn apply_progress(&mut self, file_id: FileId, percent: f64) -> bool {
        if !percent.is_finite() {
            return false;
        }
        let Some(file) = self.files.get_mut(&file_id) else {
            return false;
        };
        if file.status == ProgressStatus::Complete {
            return false;
        }
        let next = percent.clamp(0.0, 100.0);
        if next <= file.progress_percent {
            return false;
        }
        file.progress_percent = next;
        self.dirty = true;
        true
    }

    /// Moves a running record to `Complete`. Returns false for unknown or finished ids.
    pub(crate) fn apply_complete(&mut self, file_id: FileId) -> bool {
        let Some(file) = self.files.get_mut(&file_id) else {
            return false;
        };
        if file.status == ProgressStatus::Complete {
            return false;
        }
        file.progress_percent = 100.0;
        file.status = ProgressStatus::Complete;
        self.dirty = true;
        true
    }

    fn exceeds_limit(&self, size_bytes: u64) -> bool {
        self.max_file_bytes
            .is_some_and(|limit| size_bytes > limit)
    }
}

fn row_view(file: &FileRecord) -> FileRowView {
    FileRowView {
        file_id: file.id,
        name: file.name.clone(),
        size_label: format_file_size(file.size_bytes),
        icon: FileIcon::classify(&file.mime_type),
        progress_percent: file.progress_percent,
        // Halves round up, not to even.
        progress_label: format!("{:.0}% complete", file.progress_percent.round()),
        status: file.status,
    }
}
