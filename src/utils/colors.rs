/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Completed acts in green, pending ones in yellow.
pub fn color_for_status(completed: bool) -> &'static str {
    if completed { GREEN } else { YELLOW }
}

/// Paint a value, showing `--` in grey when it is blank.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() {
        format!("{GREY}--{RESET}")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_render_grey() {
        assert_eq!(colorize_optional("  "), format!("{GREY}--{RESET}"));
        assert_eq!(colorize_optional("Choir"), "Choir");
    }
}
