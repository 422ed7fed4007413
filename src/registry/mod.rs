//! registry
//!
//! Alias-to-factory directory.
//!
//! # Architecture
//!
//! The registry is owned by the host, not by the interpreter. Sessions
//! share one registry and query it once per command through the
//! [`CommandRegistry`] trait:
//!
//! - `traits`: [`CommandRegistry`] and [`HandlerFactory`]
//! - `memory`: [`InMemoryRegistry`], a thread-safe default implementation
//!
//! The interpreter never adds or removes entries; that is the host's job.

mod memory;
mod traits;

pub use memory::InMemoryRegistry;
pub use traits::{validate_alias, CommandRegistry, HandlerFactory, RegistryError};
