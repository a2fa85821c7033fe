use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use study_core::{accept_attribute, is_accepted_name, mime_type_for_name, FileHandle, Msg};
use study_logging::study_warn;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("cannot read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{0:?} is not a regular file")]
    NotAFile(PathBuf),
}

/// How the files reached the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeMode {
    /// File dialog; only the accepted extensions are offered.
    Picker,
    /// Drag-and-drop; nothing is filtered.
    Drop,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakeBatch {
    pub mode: IntakeMode,
    pub handles: Vec<FileHandle>,
    pub filtered: usize,
    pub failed: usize,
}

impl IntakeBatch {
    pub fn into_msg(self) -> Msg {
        match self.mode {
            IntakeMode::Picker => Msg::FilesSelected(self.handles),
            IntakeMode::Drop => Msg::FilesDropped(self.handles),
        }
    }
}

/// Reads name and size from disk; the MIME type is guessed from the name.
pub fn file_handle(path: &Path) -> Result<FileHandle, IntakeError> {
    let meta = fs::metadata(path).map_err(|source| IntakeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if !meta.is_file() {
        return Err(IntakeError::NotAFile(path.to_path_buf()));
    }
    let name = display_name(path);
    let mime_type = mime_type_for_name(&name);
    Ok(FileHandle::new(name, meta.len(), mime_type))
}

/// Builds handles for every readable path. Unreadable paths are logged and skipped.
pub fn collect_handles(paths: &[PathBuf], mode: IntakeMode) -> IntakeBatch {
    let mut batch = IntakeBatch {
        mode,
        handles: Vec::with_capacity(paths.len()),
        filtered: 0,
        failed: 0,
    };

    for path in paths {
        if mode == IntakeMode::Picker && !is_accepted_name(&display_name(path)) {
            study_warn!(
                "Skipping {:?}: not offered by the picker ({})",
                path,
                accept_attribute()
            );
            batch.filtered += 1;
            continue;
        }
        match file_handle(path) {
            Ok(handle) => batch.handles.push(handle),
            Err(err) => {
                study_warn!("Skipping file: {}", err);
                batch.failed += 1;
            }
        }
    }
    batch
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
