use crate::view_model::format_file_size;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    StartSimulation { file_id: crate::FileId },
    CancelSimulation { file_id: crate::FileId },
    Notify(Notification),
}

/// A toast-style message for the notification sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn files_uploaded(count: usize) -> Self {
        Self::new(
            "Files uploaded",
            format!("{count} file(s) are being processed"),
        )
    }

    pub fn processing_complete() -> Self {
        Self::new(
            "Processing complete",
            "Document analysis and assessment generation finished",
        )
    }

    pub fn files_skipped(count: usize, limit_bytes: u64) -> Self {
        Self::new(
            "Files skipped",
            format!(
                "{count} file(s) exceed the {} limit",
                format_file_size(limit_bytes)
            ),
        )
    }
}
