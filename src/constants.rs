//! Constants used throughout kiln

/// Default template file suffix
pub const DEFAULT_TEMPLATE_SUFFIX: &str = ".template";

/// Default template library directory
pub const DEFAULT_TEMPLATES_DIR: &str = "templates";

/// Library subdirectory holding files copied into every project
pub const SHARED_DIR: &str = "shared";

/// Extensions of files made executable after generation
pub const SCRIPT_EXTENSIONS: &[&str] = &["sh", "bash"];

/// Target extensions rendered with HTML auto-escaping
pub const AUTO_ESCAPE_EXTENSIONS: &[&str] = &["html", "htm", "xml"];

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
