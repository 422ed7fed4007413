//! core::command
//!
//! The `<alias>.<verb> [arg]*` command shape.
//!
//! # Invariants
//!
//! A [`ParsedCommand`] always has a non-empty alias and a non-empty verb.
//! The first token must contain exactly one `.`; anything else is rejected
//! before any registry lookup happens.

use thiserror::Error;

/// Separator between alias and verb in the first token.
pub const SEPARATOR: char = '.';

/// Errors from splitting a token sequence into a command.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command line")]
    Empty,

    #[error("malformed command token '{0}': expected <alias>.<verb>")]
    Malformed(String),
}

/// A command line split into alias, verb and arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    alias: String,
    verb: String,
    args: Vec<String>,
}

impl ParsedCommand {
    /// Build a command from tokens. The first token names the command; the
    /// rest become arguments verbatim.
    ///
    /// # Example
    ///
    /// ```
    /// use kraken_console::core::command::ParsedCommand;
    ///
    /// let tokens = vec!["fs.ls".to_string(), "/tmp".to_string()];
    /// let cmd = ParsedCommand::from_tokens(tokens).unwrap();
    /// assert_eq!(cmd.alias(), "fs");
    /// assert_eq!(cmd.verb(), "ls");
    /// assert_eq!(cmd.args(), ["/tmp"]);
    /// ```
    pub fn from_tokens(tokens: Vec<String>) -> Result<Self, CommandError> {
        let mut tokens = tokens.into_iter();
        let head = tokens.next().ok_or(CommandError::Empty)?;
        let (alias, verb) = split_head(&head)?;

        Ok(Self {
            alias: alias.to_string(),
            verb: verb.to_string(),
            args: tokens.collect(),
        })
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    pub fn verb(&self) -> &str {
        &self.verb
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Consume the command, returning its parts.
    pub fn into_parts(self) -> (String, String, Vec<String>) {
        (self.alias, self.verb, self.args)
    }
}

/// Split `<alias>.<verb>`, requiring exactly one separator and two non-empty halves.
fn split_head(head: &str) -> Result<(&str, &str), CommandError> {
    let malformed = || CommandError::Malformed(head.to_string());

    let (alias, verb) = head.split_once(SEPARATOR).ok_or_else(malformed)?;
    if alias.is_empty() || verb.is_empty() || verb.contains(SEPARATOR) {
        return Err(malformed());
    }
    Ok((alias, verb))
}
