/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Colour for a progress percentage: green when done, yellow past the
/// halfway mark, default otherwise.
pub fn color_for_percent(percent: i64) -> &'static str {
    if percent >= 100 {
        GREEN
    } else if percent >= 50 {
        YELLOW
    } else {
        RESET
    }
}
