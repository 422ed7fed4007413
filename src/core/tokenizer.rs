//! core::tokenizer
//!
//! Splits a raw console line into tokens.
//!
//! # Grammar
//!
//! - Tokens are separated by whitespace.
//! - A token that starts with `"` is a quoted token. The surrounding quotes
//!   are stripped and whitespace inside is kept.
//! - Inside a quoted token, `\` followed by any character yields that
//!   character (`\"` → `"`, `\\` → `\`).
//! - Unquoted tokens are taken verbatim, backslashes included.
//!
//! # Edge Cases
//!
//! - An unterminated quote takes the rest of the line as its content.
//!   Escapes are still resolved; a lone trailing `\` is kept.
//! - A closing quote always ends the token. Characters directly after it
//!   start the next token.
//! - A `"` in the middle of an unquoted token is an ordinary character.
//!
//! # Example
//!
//! ```
//! use kraken_console::core::tokenizer::tokenize;
//!
//! let tokens = tokenize(r#"foo.bar "hello world" baz"#);
//! assert_eq!(tokens, vec!["foo.bar", "hello world", "baz"]);
//! ```

use std::iter::Peekable;
use std::str::Chars;

/// Tokenize a raw line.
///
/// Never fails; empty or all-whitespace input yields no tokens.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut chars = line.chars().peekable();

    loop {
        // Skip separators
        while chars.next_if(|c| c.is_whitespace()).is_some() {}

        match chars.peek() {
            None => break,
            Some('"') => {
                chars.next();
                tokens.push(read_quoted(&mut chars));
            }
            Some(_) => tokens.push(read_bare(&mut chars)),
        }
    }

    tokens
}

/// Read a quoted token body. The opening quote is already consumed.
fn read_quoted(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut token = String::new();

    while let Some(c) = chars.next() {
        match c {
            '"' => return token,
            '\\' => match chars.next() {
                Some(escaped) => token.push(escaped),
                None => token.push('\\'),
            },
            other => token.push(other),
        }
    }

    // Unterminated: rest of line
    token
}

/// Read a maximal run of non-whitespace characters.
fn read_bare(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut token = String::new();
    while let Some(c) = chars.next_if(|c| !c.is_whitespace()) {
        token.push(c);
    }
    token
}
