//! engine
//!
//! Runs a command line: Tokenize -> Resolve -> Validate -> Invoke -> Report.
//!
//! # Architecture
//!
//! ```text
//! raw line -> tokenizer -> resolver (+registry) -> invoke (+validate) -> ui::output
//! ```
//!
//! - [`resolver`] - Splits `<alias>.<verb>` and asks the registry for a handler
//! - [`validate`] - Checks argument count against a verb's usage contract
//! - [`invoke`] - Looks up the verb, applies access policy, calls it
//! - [`runner`] - Per-line lifecycle and the session loop
//! - [`handler`] - Handler trait and verb tables
//! - [`context`] - Output context and session state
//! - [`outcome`] - Result of one command
//!
//! # Invariants
//!
//! - One command runs to completion before the next line is read
//! - No outcome ends a session
//! - The engine holds no locks; the registry handles its own concurrency

pub mod context;
pub mod handler;
pub mod invoke;
pub mod outcome;
pub mod resolver;
pub mod runner;
pub mod validate;

pub use context::{BufferedContext, ExecutionContext, Prompt, Session, WriterContext};
pub use handler::{Handler, TableFactory, TableHandler, Verb, VerbInfo, VerbTable};
pub use invoke::invoke;
pub use outcome::ExecutionOutcome;
pub use resolver::{resolve, ResolveError, Resolved};
pub use runner::{Interpreter, ScriptRunner, SessionStats};
pub use validate::{validate_arguments, ArgumentError};
