//! registry::traits
//!
//! Registry and factory trait definitions.
//!
//! # Design
//!
//! The core only ever asks two questions: "which factory serves this
//! alias?" and "give me a fresh handler". Registries are shared by every
//! session, so implementations must be thread-safe (Send + Sync) and
//! tolerate entries appearing or disappearing between lookups.

use std::sync::Arc;

use thiserror::Error;

use crate::engine::handler::Handler;

/// Errors from registry maintenance.
///
/// Lookups never fail; a missing alias is simply `None`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// Alias cannot be typed as the first half of `<alias>.<verb>`.
    #[error("invalid alias '{0}': must be non-empty without '.' or whitespace")]
    InvalidAlias(String),

    /// Another factory already serves this alias.
    #[error("alias already registered: {0}")]
    Duplicate(String),
}

/// Produces a fresh handler for each command invocation.
pub trait HandlerFactory: Send + Sync {
    /// Create a handler, or `None` if the service cannot provide one now.
    fn create(&self) -> Option<Box<dyn Handler>>;
}

/// Alias-to-factory directory consulted on every command.
pub trait CommandRegistry: Send + Sync {
    /// Find the factory registered under `alias`.
    fn lookup(&self, alias: &str) -> Option<Arc<dyn HandlerFactory>>;

    /// All registered aliases, sorted.
    fn aliases(&self) -> Vec<String>;
}

/// Check that an alias is addressable from the command grammar.
pub fn validate_alias(alias: &str) -> Result<(), RegistryError> {
    if alias.is_empty()
        || alias.contains(crate::core::command::SEPARATOR)
        || alias.chars().any(char::is_whitespace)
        || alias.contains('"')
    {
        return Err(RegistryError::InvalidAlias(alias.to_string()));
    }
    Ok(())
}
