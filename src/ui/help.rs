//! ui::help
//!
//! Usage help rendered when a command's arguments don't match its contract.
//!
//! # Format
//!
//! ```text
//! <description>
//!
//! Arguments
//! 1. <name>: <description> (required)
//! 2. <name>: <description> (optional)
//! ```
//!
//! The description block is left out when the description is empty, and
//! the `Arguments` section when no arguments are declared.

use crate::core::usage::{ArgumentSpec, UsageContract};

/// Printed when a verb rejects its arguments but declares no usage.
pub const NO_USAGE_MESSAGE: &str =
    "argument mismatch, but no usage found. Please ask the script author to add usage information.";

/// Heading above the argument list.
pub const ARGUMENTS_HEADING: &str = "Arguments";

/// Render help lines for a usage mismatch.
pub fn render_usage(usage: Option<&UsageContract>) -> Vec<String> {
    let Some(usage) = usage else {
        return vec![NO_USAGE_MESSAGE.to_string()];
    };

    let mut lines = Vec::new();

    if !usage.description().is_empty() {
        lines.push(usage.description().to_string());
        lines.push(String::new());
    }

    if !usage.arguments().is_empty() {
        lines.push(ARGUMENTS_HEADING.to_string());
        lines.extend(
            usage
                .arguments()
                .iter()
                .enumerate()
                .map(|(i, arg)| format_argument(i + 1, arg)),
        );
    }

    lines
}

/// Format one numbered argument line.
pub fn format_argument(number: usize, arg: &ArgumentSpec) -> String {
    let flag = if arg.optional { "optional" } else { "required" };
    format!("{}. {}: {} ({})", number, arg.name, arg.description, flag)
}
