//! Application constants.

/// Event update interval in milliseconds (42ms = ~24 FPS)
pub const EVENT_HANDLER_INTERVAL_MS: u64 = 42;

/// Log file name inside the cache directory
pub const LOG_FILE_NAME: &str = "mint.log";

/// Minimum terminal size the layout is drawn for
pub const MIN_TERMINAL_WIDTH: u16 = 40;
pub const MIN_TERMINAL_HEIGHT: u16 = 8;
