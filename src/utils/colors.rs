/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

use crate::models::due::DueClass;

/// Classification color:
/// overdue → red, due soon → yellow, paid → green, pending → reset.
pub fn color_for_class(class: DueClass) -> &'static str {
    match class {
        DueClass::Overdue => RED,
        DueClass::DueSoon => YELLOW,
        DueClass::Paid => GREEN,
        DueClass::Pending => RESET,
    }
}

/// Ritorna formattazione colorata di un valore opzionale.
///
/// Esempio: `colorize_optional("--")` → "<grey>--<reset>"
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
