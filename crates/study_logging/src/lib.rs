#![deny(missing_docs)]
//! Logging macros shared by `study_core` tests, `study_sim` and `study_app`.
//!
//! Every crate logs through `study_*!` so the binary decides the backend in
//! one place. `log` is re-exported for the macros; callers need no direct
//! dependency on it.

#[doc(hidden)]
pub use log;

/// Per-tick simulator detail, e.g. the running percentage.
#[macro_export]
macro_rules! study_trace {
    ($($arg:tt)*) => {{
        $crate::log::trace!($($arg)*);
    }};
}

/// Run lifecycle: simulator start, cancellation, completion.
#[macro_export]
macro_rules! study_debug {
    ($($arg:tt)*) => {{
        $crate::log::debug!($($arg)*);
    }};
}

/// User-visible events: ingest batches, notifications, written pages.
#[macro_export]
macro_rules! study_info {
    ($($arg:tt)*) => {{
        $crate::log::info!($($arg)*);
    }};
}

/// Skipped inputs such as unreadable paths or a stopped simulator.
#[macro_export]
macro_rules! study_warn {
    ($($arg:tt)*) => {{
        $crate::log::warn!($($arg)*);
    }};
}

/// Failures that end a run.
#[macro_export]
macro_rules! study_error {
    ($($arg:tt)*) => {{
        $crate::log::error!($($arg)*);
    }};
}

/// Level used by [`initialize_for_tests`]: `STUDY_TEST_LOG` when it parses,
/// otherwise `Warn` so simulator traces stay out of test output.
pub fn test_level() -> log::LevelFilter {
    std::env::var("STUDY_TEST_LOG")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(log::LevelFilter::Warn)
}

/// Installs a stderr logger for integration tests. Repeated calls are no-ops.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

    let _ = TermLogger::init(
        test_level(),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Never,
    );
}
