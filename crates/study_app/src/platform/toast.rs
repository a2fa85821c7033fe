use chrono::{Local, NaiveTime};
use study_logging::study_info;

/// Where toast notifications end up.
pub trait NotificationSink {
    fn notify(&self, title: &str, description: &str);
}

/// Prints toasts to stdout with a wall-clock timestamp.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalToasts;

impl NotificationSink for TerminalToasts {
    fn notify(&self, title: &str, description: &str) {
        study_info!("Notify title={:?} description={:?}", title, description);
        println!("{}", format_toast(Local::now().time(), title, description));
    }
}

pub fn format_toast(at: NaiveTime, title: &str, description: &str) -> String {
    format!("[{}] {title}: {description}", at.format("%H:%M:%S"))
}
