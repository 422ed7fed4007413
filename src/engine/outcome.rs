//! engine::outcome
//!
//! Result of running one command line.
//!
//! No outcome is fatal to a session. Each variant carries what the
//! output layer needs to print its diagnostic.

use crate::core::usage::UsageContract;
use crate::engine::resolver::ResolveError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionOutcome {
    /// The verb ran to completion.
    Success,

    /// The line could not be split into `<alias>.<verb>`.
    MalformedCommand(String),

    /// No registry entry (or no handler) for the alias.
    CommandNotFound { alias: String },

    /// The handler has no verb by that name.
    VerbNotFound { handler: String, verb: String },

    /// The handler's policy forbids the verb.
    PermissionDenied { verb: String, reason: String },

    /// Too few arguments for the verb's contract, or no contract to explain.
    UsageMismatch(Option<UsageContract>),

    /// The verb failed; the message is the handler's own text.
    TargetFailure(String),
}

impl ExecutionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ExecutionOutcome::Success)
    }
}

impl From<ResolveError> for ExecutionOutcome {
    fn from(err: ResolveError) -> Self {
        match err {
            ResolveError::Malformed(e) => ExecutionOutcome::MalformedCommand(e.to_string()),
            ResolveError::CommandNotFound(alias) => ExecutionOutcome::CommandNotFound { alias },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::command::CommandError;

    #[test]
    fn only_success_is_success() {
        assert!(ExecutionOutcome::Success.is_success());
        assert!(!ExecutionOutcome::TargetFailure("x".into()).is_success());
        assert!(!ExecutionOutcome::UsageMismatch(None).is_success());
    }

    #[test]
    fn from_resolve_error() {
        assert_eq!(
            ExecutionOutcome::from(ResolveError::CommandNotFound("fs".into())),
            ExecutionOutcome::CommandNotFound { alias: "fs".into() }
        );
        assert!(matches!(
            ExecutionOutcome::from(ResolveError::Malformed(CommandError::Empty)),
            ExecutionOutcome::MalformedCommand(_)
        ));
    }
}
