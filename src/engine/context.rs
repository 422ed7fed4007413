//! engine::context
//!
//! Execution context and per-session state.
//!
//! # Design
//!
//! The transport owns the output sink and hands it to the interpreter as an
//! [`ExecutionContext`]. Everything that belongs to one session but not to
//! the sink (the active handler slot and prompt settings) lives in
//! [`Session`], which is passed explicitly alongside the context.
//!
//! Two contexts are provided:
//! - [`WriterContext`] writes to any `io::Write` (stdout in the binary)
//! - [`BufferedContext`] collects output in memory for hosts and tests

use std::io::Write;

use crate::core::config::DEFAULT_PROMPT;
use crate::engine::handler::Handler;

/// Output side of a console session, supplied by the transport.
pub trait ExecutionContext {
    /// Write text without a trailing newline.
    fn print(&mut self, text: &str);

    /// Write text followed by a newline.
    fn println(&mut self, text: &str) {
        self.print(text);
        self.print("\n");
    }

    /// Re-enable echo of typed input.
    fn turn_echo_on(&mut self);

    /// Discard any pending unread input.
    fn flush_input(&mut self);

    /// True once the sink can no longer accept output.
    fn is_closed(&self) -> bool {
        false
    }
}

/// Prompt settings for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub text: String,
    pub enabled: bool,
}

impl Default for Prompt {
    fn default() -> Self {
        Self {
            text: DEFAULT_PROMPT.to_string(),
            enabled: true,
        }
    }
}

/// Per-session interpreter state.
#[derive(Default)]
pub struct Session {
    current: Option<Box<dyn Handler>>,
    prompt: Prompt,
}

impl Session {
    pub fn new(prompt: Prompt) -> Self {
        Self {
            current: None,
            prompt,
        }
    }

    pub fn prompt(&self) -> &Prompt {
        &self.prompt
    }

    pub fn set_prompt_enabled(&mut self, enabled: bool) {
        self.prompt.enabled = enabled;
    }

    /// Install a handler in the active slot, replacing any previous one.
    pub fn set_current_handler(&mut self, handler: Box<dyn Handler>) -> &mut dyn Handler {
        self.current.insert(handler).as_mut()
    }

    pub fn current_handler(&self) -> Option<&dyn Handler> {
        self.current.as_deref()
    }

    /// Empty the active slot, dropping the handler.
    pub fn clear_current_handler(&mut self) {
        self.current = None;
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("current", &self.current.as_ref().map(|h| h.name().to_string()))
            .field("prompt", &self.prompt)
            .finish()
    }
}

/// Context writing to an `io::Write` sink.
///
/// Output is flushed after every write so prompts appear immediately.
/// The first write error closes the context; later output is dropped.
pub struct WriterContext<W: Write> {
    writer: W,
    echo: bool,
    input_flushes: usize,
    closed: bool,
}

impl<W: Write> WriterContext<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            echo: false,
            input_flushes: 0,
            closed: false,
        }
    }

    pub fn echo(&self) -> bool {
        self.echo
    }

    /// Number of times the input channel was flushed.
    pub fn input_flushes(&self) -> usize {
        self.input_flushes
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ExecutionContext for WriterContext<W> {
    fn print(&mut self, text: &str) {
        if self.closed {
            return;
        }
        let result = self
            .writer
            .write_all(text.as_bytes())
            .and_then(|_| self.writer.flush());
        if let Err(e) = result {
            tracing::warn!("console output closed: {}", e);
            self.closed = true;
        }
    }

    fn turn_echo_on(&mut self) {
        self.echo = true;
    }

    fn flush_input(&mut self) {
        // Line-buffered input has nothing pending between lines
        self.input_flushes += 1;
        tracing::trace!(flushes = self.input_flushes, "input flushed");
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}

/// Context that keeps all output in memory.
#[derive(Debug, Default, Clone)]
pub struct BufferedContext {
    output: String,
    echo: bool,
    input_flushes: usize,
}

impl BufferedContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything printed so far.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Return and clear the collected output.
    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }

    pub fn echo(&self) -> bool {
        self.echo
    }

    /// Number of times the input channel was flushed.
    pub fn input_flushes(&self) -> usize {
        self.input_flushes
    }
}

impl ExecutionContext for BufferedContext {
    fn print(&mut self, text: &str) {
        self.output.push_str(text);
    }

    fn turn_echo_on(&mut self) {
        self.echo = true;
    }

    fn flush_input(&mut self) {
        self.input_flushes += 1;
    }
}
