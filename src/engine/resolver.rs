//! engine::resolver
//!
//! Turns tokens into a live handler.
//!
//! # Design
//!
//! Every call performs a fresh registry lookup and creates a fresh
//! handler. Nothing is cached, so aliases registered or removed between
//! two commands are picked up immediately.

use thiserror::Error;

use crate::core::command::{CommandError, ParsedCommand};
use crate::engine::handler::Handler;
use crate::registry::CommandRegistry;

/// Errors from command resolution.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error(transparent)]
    Malformed(#[from] CommandError),

    #[error("command not found: {0}")]
    CommandNotFound(String),
}

/// A command with the handler that will run it.
pub struct Resolved {
    pub command: ParsedCommand,
    pub handler: Box<dyn Handler>,
}

impl std::fmt::Debug for Resolved {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolved")
            .field("command", &self.command)
            .field("handler", &self.handler.name())
            .finish()
    }
}

/// Resolve tokens against the registry.
///
/// # Errors
///
/// - `Malformed` if there are no tokens or the first is not `<alias>.<verb>`
/// - `CommandNotFound` if no factory serves the alias or it yields no handler
pub fn resolve(tokens: Vec<String>, registry: &dyn CommandRegistry) -> Result<Resolved, ResolveError> {
    let command = ParsedCommand::from_tokens(tokens)?;

    let factory = registry
        .lookup(command.alias())
        .ok_or_else(|| ResolveError::CommandNotFound(command.alias().to_string()))?;

    let handler = factory.create().ok_or_else(|| {
        tracing::warn!(alias = command.alias(), "factory produced no handler");
        ResolveError::CommandNotFound(command.alias().to_string())
    })?;

    Ok(Resolved { command, handler })
}
