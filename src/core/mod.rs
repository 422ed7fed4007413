//! core
//!
//! Pure domain types for the console.
//!
//! # Modules
//!
//! - [`tokenizer`] - Raw line to tokens
//! - [`command`] - `<alias>.<verb>` command shape
//! - [`usage`] - Usage contracts declared by verbs
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Nothing in this module performs console I/O
//! - Parsing is deterministic and never panics on user input

pub mod command;
pub mod config;
pub mod tokenizer;
pub mod usage;
