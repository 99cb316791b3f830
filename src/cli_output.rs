//! Standardized CLI output helpers for a consistent modelpack experience.
//!
//! All user-facing output should use these helpers instead of raw `println!`.

use colored::*;

pub const ICON_SUCCESS: &str = "\u{2713}"; // ✓
pub const ICON_INFO: &str = "\u{25b6}"; // ▶
pub const ICON_HINT: &str = "\u{00b7}"; // ·

/// Print a success message: ✓ message
pub fn success(msg: &str) {
    println!("{} {}", ICON_SUCCESS.green(), msg);
}

/// Print a dimmed hint: · message
pub fn hint(msg: &str) {
    println!("  {} {}", ICON_HINT.dimmed(), msg.dimmed());
}

/// Print a bold cyan header
pub fn header(msg: &str) {
    println!("{}", msg.cyan().bold());
}

/// Print a pipeline stage line: ▶ stage
pub fn step(msg: &str) {
    println!("  {} {}", ICON_INFO.cyan(), msg);
}
