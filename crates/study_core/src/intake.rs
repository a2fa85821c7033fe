/// File extensions offered by the picker. Drag-and-drop input is not filtered.
pub const ACCEPTED_EXTENSIONS: &[&str] = &["pdf", "doc", "docx", "ppt", "pptx", "jpg", "jpeg", "png"];

/// Shown next to the drop area.
pub const SUPPORTED_FORMATS_LABEL: &str = "PDF, DOC, DOCX, PPT, PPTX, JPG, PNG";

pub const DEFAULT_MAX_FILE_BYTES: u64 = 20 * 1024 * 1024;

const MIME_TABLE: &[(&str, &str)] = &[
    ("pdf", "application/pdf"),
    ("doc", "application/msword"),
    (
        "docx",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    ),
    ("ppt", "application/vnd.ms-powerpoint"),
    (
        "pptx",
        "application/vnd.openxmlformats-officedocument.presentationml.presentation",
    ),
    ("xls", "application/vnd.ms-excel"),
    (
        "xlsx",
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    ),
    ("csv", "text/csv"),
    ("txt", "text/plain"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
];

const FALLBACK_MIME: &str = "application/octet-stream";

/// The picker's `accept` attribute, e.g. `.pdf,.doc,...`.
pub fn accept_attribute() -> String {
    ACCEPTED_EXTENSIONS
        .iter()
        .map(|ext| format!(".{ext}"))
        .collect::<Vec<_>>()
        .join(",")
}

pub fn is_accepted_name(name: &str) -> bool {
    extension(name).is_some_and(|ext| {
        ACCEPTED_EXTENSIONS
            .iter()
            .any(|accepted| accepted.eq_ignore_ascii_case(ext))
    })
}

/// Guesses a MIME type from the file name's extension.
pub fn mime_type_for_name(name: &str) -> &'static str {
    extension(name)
        .and_then(|ext| {
            MIME_TABLE
                .iter()
                .find(|(known, _)| known.eq_ignore_ascii_case(ext))
                .map(|(_, mime)| *mime)
        })
        .unwrap_or(FALLBACK_MIME)
}

fn extension(name: &str) -> Option<&str> {
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext)
}
