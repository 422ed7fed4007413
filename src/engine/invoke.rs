//! engine::invoke
//!
//! Calls a verb on a resolved handler.
//!
//! # Order of Checks
//!
//! 1. Verb lookup (`VerbNotFound`)
//! 2. Handler access policy (`PermissionDenied`)
//! 3. Argument count against the verb's contract (`UsageMismatch`)
//! 4. The verb itself (`TargetFailure` on error)
//!
//! Verb errors are reported with the handler's own message; nothing here
//! rewrites it. Two cases are special:
//! - A verb error that is an [`ArgumentError`] becomes `UsageMismatch`, so
//!   the user sees usage help (or the no-usage line) instead.
//! - A panicking verb is caught and reported as `TargetFailure` with the
//!   panic message. The session keeps running.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use tracing::warn;

use crate::engine::context::ExecutionContext;
use crate::engine::handler::Handler;
use crate::engine::outcome::ExecutionOutcome;
use crate::engine::validate::{validate_arguments, ArgumentError};

/// Invoke `verb` on `handler` with `args`, printing through `ctx`.
pub fn invoke(
    handler: &mut dyn Handler,
    verb: &str,
    args: &[String],
    ctx: &mut dyn ExecutionContext,
) -> ExecutionOutcome {
    let Some(info) = handler.lookup(verb) else {
        warn!("script runner: {}.{} not found", handler.name(), verb);
        return ExecutionOutcome::VerbNotFound {
            handler: handler.name().to_string(),
            verb: verb.to_string(),
        };
    };
    let usage = info.usage.cloned();

    if let Err(reason) = handler.permit(verb) {
        warn!("script runner: {}.{} forbidden: {}", handler.name(), verb, reason);
        return ExecutionOutcome::PermissionDenied {
            verb: verb.to_string(),
            reason,
        };
    }

    if let Err(e) = validate_arguments(usage.as_ref(), args) {
        tracing::debug!("script runner: {}.{}: {}", handler.name(), verb, e);
        return ExecutionOutcome::UsageMismatch(usage);
    }

    let result = panic::catch_unwind(AssertUnwindSafe(|| handler.call(verb, ctx, args)));

    match result {
        Ok(Ok(())) => ExecutionOutcome::Success,
        Ok(Err(e)) if e.downcast_ref::<ArgumentError>().is_some() => {
            tracing::debug!("script runner: {}.{} rejected arguments: {}", handler.name(), verb, e);
            ExecutionOutcome::UsageMismatch(usage)
        }
        Ok(Err(e)) => {
            warn!("script runner: {}.{} failed: {:#}", handler.name(), verb, e);
            ExecutionOutcome::TargetFailure(e.to_string())
        }
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            warn!("script runner: {}.{} panicked: {}", handler.name(), verb, message);
            ExecutionOutcome::TargetFailure(message)
        }
    }
}

/// Text of a panic payload from `panic!` or a failed index/unwrap.
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "verb panicked".to_string()
    }
}
