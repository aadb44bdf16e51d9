//! Terminal logging with colored module prefixes.
//!
//! # Example
//!
//! ```ignore
//! log!("serve"; "http://{}", addr);
//! log!("store"; "failed to save content: {err}");
//! ```

use colored::{ColoredString, Colorize};
use std::io::{Write, stderr, stdout};

/// Log a message with a colored module prefix.
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Write `[module] message` to the terminal.
///
/// Warnings and errors (the `store` and `error` modules) go to stderr so
/// piped page output stays clean.
pub fn log(module: &str, message: &str) {
    let prefix = colorize_prefix(module);
    if matches!(module, "store" | "error") {
        let mut stderr = stderr().lock();
        writeln!(stderr, "{prefix} {message}").ok();
    } else {
        let mut stdout = stdout().lock();
        writeln!(stdout, "{prefix} {message}").ok();
        stdout.flush().ok();
    }
}

/// Apply color to a module prefix based on module type.
fn colorize_prefix(module: &str) -> ColoredString {
    let prefix = format!("[{module}]");
    match module.to_ascii_lowercase().as_str() {
        "serve" => prefix.bright_blue().bold(),
        "build" => prefix.bright_green().bold(),
        "store" => prefix.bright_yellow().bold(),
        "error" => prefix.bright_red().bold(),
        _ => prefix.bright_yellow().bold(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_is_bracketed() {
        colored::control::set_override(false);
        assert_eq!(colorize_prefix("serve").to_string(), "[serve]");
        assert_eq!(colorize_prefix("store").to_string(), "[store]");
        colored::control::unset_override();
    }

    #[test]
    fn test_log_does_not_panic() {
        log("serve", "hello");
        log("store", "a warning\nwith a second line");
    }
}
