//! ui
//!
//! User-facing text.
//!
//! # Modules
//!
//! - [`output`] - Diagnostic lines for command outcomes
//! - [`help`] - Usage help for argument mismatches
//!
//! # Design
//!
//! All text a user sees for a failed command is produced here, so the
//! engine stays free of formatting decisions.

pub mod help;
pub mod output;
