//! Study core: pure upload state machine, view-model helpers and page content.
pub mod content;
mod effect;
mod intake;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::{Effect, Notification};
pub use intake::{
    accept_attribute, is_accepted_name, mime_type_for_name, ACCEPTED_EXTENSIONS,
    DEFAULT_MAX_FILE_BYTES, SUPPORTED_FORMATS_LABEL,
};
pub use msg::Msg;
pub use state::{AppState, FileHandle, FileId, FileRecord, IngestStats, ProgressStatus};
pub use update::update;
pub use view_model::{format_file_size, AppViewModel, FileIcon, FileRowView};
