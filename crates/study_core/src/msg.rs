#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User picked files through the file dialog.
    FilesSelected(Vec<crate::FileHandle>),
    /// User dropped files onto the upload area.
    FilesDropped(Vec<crate::FileHandle>),
    /// A drag payload entered the upload area.
    DragEntered,
    /// A drag payload left the upload area without dropping.
    DragLeft,
    /// User clicked the remove button on a file row.
    RemoveClicked { file_id: crate::FileId },
    /// Simulator progress for a file, as an absolute percentage.
    FileProgress { file_id: crate::FileId, percent: f64 },
    /// Simulator reached 100% for a file.
    FileCompleted { file_id: crate::FileId },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
