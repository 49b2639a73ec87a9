use colored::Colorize;
use std::io::{self, Write};

use super::types::StatusLevel;

/// Format a status message with its semantic level
pub fn format_status(text: &str, level: StatusLevel) -> String {
    match level {
        StatusLevel::Info => format!("{} {}", "•".blue(), text),
        StatusLevel::Success => format!("{} {}", "✓".green(), text),
        StatusLevel::Warning => format!("{} {}", "!".yellow(), text.yellow()),
        StatusLevel::Error => format!("{} {}", "✗".red(), text.red()),
    }
}

/// Write a status line
pub fn set_status(out: &mut impl Write, text: &str, level: StatusLevel) -> io::Result<()> {
    writeln!(out, "{}", format_status(text, level))
}
