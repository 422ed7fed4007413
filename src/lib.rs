//! Kraken Console - a line-oriented command interpreter
//!
//! Kraken Console turns one line of user input such as
//! `bundle.install "/opt/pkgs/my bundle.jar" --force` into a call on a
//! handler chosen at runtime, checks the call against the verb's declared
//! usage, and prints either the verb's output or usage help.
//!
//! # Architecture
//!
//! The codebase follows a layered architecture:
//!
//! - [`cli`] - The `kraken` binary's front end (stdin/stdout transport)
//! - [`engine`] - Resolve → Validate → Invoke → Report for each line
//! - [`core`] - Tokenizer, command shape, usage contracts, configuration
//! - [`registry`] - Alias-to-factory directory shared by sessions
//! - [`builtins`] - Handlers that ship with the console
//! - [`ui`] - Diagnostic and help text
//!
//! # Guarantees
//!
//! 1. A failing command never ends the session
//! 2. A verb's own error text reaches the user unmodified
//! 3. Handlers are created fresh for every command
//! 4. Sessions share nothing but the registry

pub mod builtins;
pub mod cli;
pub mod core;
pub mod engine;
pub mod registry;
pub mod ui;
