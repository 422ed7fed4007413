//! ui::output
//!
//! Diagnostic text for command outcomes.
//!
//! # Design
//!
//! Every failed command produces user-facing text here and nowhere else.
//! Usage mismatches defer to [`help`](super::help); all other failures
//! are a single line. Successful commands print nothing extra.

use std::fmt::Display;

use super::help::render_usage;
use crate::engine::context::ExecutionContext;
use crate::engine::outcome::ExecutionOutcome;

/// Generic reply for lines that are not `<alias>.<verb>` or name no verb.
pub const SYNTAX_ERROR: &str = "syntax error.";

/// Render the lines describing an outcome.
pub fn render(outcome: &ExecutionOutcome) -> Vec<String> {
    match outcome {
        ExecutionOutcome::Success => Vec::new(),
        ExecutionOutcome::MalformedCommand(_) | ExecutionOutcome::VerbNotFound { .. } => {
            vec![SYNTAX_ERROR.to_string()]
        }
        ExecutionOutcome::CommandNotFound { alias } => {
            vec![format!("command not found: {}", alias)]
        }
        ExecutionOutcome::PermissionDenied { reason, .. } => {
            vec![format!("permission denied: {}", reason)]
        }
        ExecutionOutcome::UsageMismatch(usage) => render_usage(usage.as_ref()),
        ExecutionOutcome::TargetFailure(message) => vec![message.clone()],
    }
}

/// Print an outcome's diagnostic lines to the context.
pub fn report(outcome: &ExecutionOutcome, ctx: &mut dyn ExecutionContext) {
    for line in render(outcome) {
        ctx.println(&line);
    }
}

/// Format a list of items.
pub fn format_list<T: Display>(items: &[T], prefix: &str) -> String {
    items
        .iter()
        .map(|item| format!("{}{}", prefix, item))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::usage::{ArgumentSpec, UsageContract};
    use crate::engine::context::BufferedContext;
    use crate::ui::help::NO_USAGE_MESSAGE;

    #[test]
    fn success_is_silent() {
        assert!(render(&ExecutionOutcome::Success).is_empty());
    }

    #[test]
    fn syntax_errors() {
        assert_eq!(
            render(&ExecutionOutcome::MalformedCommand("help".into())),
            [SYNTAX_ERROR]
        );
        assert_eq!(
            render(&ExecutionOutcome::VerbNotFound {
                handler: "core".into(),
                verb: "nope".into()
            }),
            [SYNTAX_ERROR]
        );
    }

    #[test]
    fn command_not_found_names_alias() {
        assert_eq!(
            render(&ExecutionOutcome::CommandNotFound { alias: "fs".into() }),
            ["command not found: fs"]
        );
    }

    #[test]
    fn permission_denied_verbatim_reason() {
        assert_eq!(
            render(&ExecutionOutcome::PermissionDenied {
                verb: "rm".into(),
                reason: "read-only".into()
            }),
            ["permission denied: read-only"]
        );
    }

    #[test]
    fn target_failure_verbatim() {
        let message = "IOError: disk full";
        assert_eq!(
            render(&ExecutionOutcome::TargetFailure(message.into())),
            [message]
        );
    }

    #[test]
    fn usage_mismatch_without_contract() {
        assert_eq!(
            render(&ExecutionOutcome::UsageMismatch(None)),
            [NO_USAGE_MESSAGE]
        );
    }

    #[test]
    fn report_prints_lines() {
        let usage = UsageContract::new("d").argument(ArgumentSpec::required("x", "y"));
        let mut ctx = BufferedContext::new();
        report(&ExecutionOutcome::UsageMismatch(Some(usage)), &mut ctx);
        assert_eq!(ctx.output(), "d\n\nArguments\n1. x: y (required)\n");
    }

    #[test]
    fn format_list_prefixes() {
        assert_eq!(format_list(&["a", "b"], "  "), "  a\n  b");
        assert_eq!(format_list::<&str>(&[], "  "), "");
    }
}
