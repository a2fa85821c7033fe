pub const PAGE_TITLE: &str = "AI-Powered Study System";
pub const STYLESHEET: &str = "styles.css";

pub const SECTION_HERO: &str = "hero";
pub const SECTION_UPLOAD: &str = "upload";
pub const SECTION_DASHBOARD: &str = "dashboard";
pub const SECTION_FEATURES: &str = "features";

pub const DROP_ZONE: &str = "drop-zone";
pub const FILE_INPUT: &str = "file-input";

/// Width of the terminal progress bar in cells.
pub const BAR_WIDTH: usize = 20;
