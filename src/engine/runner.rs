//! engine::runner
//!
//! Drives command lines through the interpreter pipeline.
//!
//! # Lifecycle
//!
//! For every line, [`ScriptRunner::run_line`]:
//! 1. Turns echo on and flushes pending input
//! 2. Tokenizes and resolves the line, placing the handler in the
//!    session's active slot
//! 3. Invokes the verb
//! 4. Prints the outcome's diagnostic (help text for usage mismatches)
//! 5. Prints the prompt, if enabled
//! 6. Clears the active slot
//!
//! [`Interpreter`] loops `run_line` over an input source until end of
//! input. No outcome stops the loop.

use std::io::BufRead;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::core::tokenizer::tokenize;
use crate::engine::context::{ExecutionContext, Session};
use crate::engine::invoke::invoke;
use crate::engine::outcome::ExecutionOutcome;
use crate::engine::resolver::{resolve, ResolveError};
use crate::registry::CommandRegistry;
use crate::ui::output;

/// Runs single command lines against a registry.
pub struct ScriptRunner<'r> {
    registry: &'r dyn CommandRegistry,
}

impl<'r> ScriptRunner<'r> {
    pub fn new(registry: &'r dyn CommandRegistry) -> Self {
        Self { registry }
    }

    /// Run one line to completion and report the result through `ctx`.
    pub fn run_line(
        &self,
        line: &str,
        session: &mut Session,
        ctx: &mut dyn ExecutionContext,
    ) -> ExecutionOutcome {
        ctx.turn_echo_on();
        ctx.flush_input();

        let outcome = self.execute(line, session, ctx);
        output::report(&outcome, ctx);

        if session.prompt().enabled {
            ctx.print(&session.prompt().text);
        }

        session.clear_current_handler();
        outcome
    }

    /// Resolve and invoke without printing diagnostics or prompt.
    pub fn execute(
        &self,
        line: &str,
        session: &mut Session,
        ctx: &mut dyn ExecutionContext,
    ) -> ExecutionOutcome {
        let resolved = match resolve(tokenize(line), self.registry) {
            Ok(resolved) => resolved,
            Err(e @ ResolveError::CommandNotFound(_)) => {
                warn!("script runner: {}", e);
                return e.into();
            }
            Err(e) => {
                debug!("script runner: cannot resolve '{}': {}", line, e);
                return e.into();
            }
        };

        let (_, verb, args) = resolved.command.into_parts();
        let handler = session.set_current_handler(resolved.handler);
        invoke(handler, &verb, &args, ctx)
    }
}

/// Counters for one interpreter run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Lines that reached the runner
    pub executed: usize,
    /// Lines whose outcome was not `Success`
    pub failed: usize,
}

/// A session-bound interpreter over a shared registry.
pub struct Interpreter {
    registry: Arc<dyn CommandRegistry>,
    session: Session,
}

impl Interpreter {
    pub fn new(registry: Arc<dyn CommandRegistry>, session: Session) -> Self {
        Self { registry, session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Run a single line.
    pub fn run_line(&mut self, line: &str, ctx: &mut dyn ExecutionContext) -> ExecutionOutcome {
        ScriptRunner::new(self.registry.as_ref()).run_line(line, &mut self.session, ctx)
    }

    /// Read lines until end of input or until the context closes.
    ///
    /// The prompt is printed once up front and after every line. Blank
    /// lines only re-print the prompt.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading input fails.
    pub fn run<R: BufRead>(
        &mut self,
        input: R,
        ctx: &mut dyn ExecutionContext,
    ) -> std::io::Result<SessionStats> {
        let mut stats = SessionStats::default();
        self.print_prompt(ctx);

        for line in input.lines() {
            let line = line?;
            if ctx.is_closed() {
                break;
            }

            if line.trim().is_empty() {
                self.print_prompt(ctx);
                continue;
            }

            stats.executed += 1;
            if !self.run_line(&line, ctx).is_success() {
                stats.failed += 1;
            }
        }

        debug!(
            executed = stats.executed,
            failed = stats.failed,
            "session finished"
        );
        Ok(stats)
    }

    fn print_prompt(&self, ctx: &mut dyn ExecutionContext) {
        if self.session.prompt().enabled {
            ctx.print(&self.session.prompt().text);
        }
    }
}
