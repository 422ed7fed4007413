//! core::usage
//!
//! Usage contracts declared by handler verbs.
//!
//! A [`UsageContract`] is ordinary data built in code next to the verb it
//! describes. The core reads it for argument-count validation and for help
//! output, and never mutates it.
//!
//! # Example
//!
//! ```
//! use kraken_console::core::usage::{ArgumentSpec, UsageContract};
//!
//! let usage = UsageContract::new("copy a file")
//!     .argument(ArgumentSpec::required("from", "source path"))
//!     .argument(ArgumentSpec::required("to", "destination path"))
//!     .argument(ArgumentSpec::optional("mode", "permission bits"));
//!
//! assert_eq!(usage.required_count(), 2);
//! assert_eq!(usage.arguments().len(), 3);
//! ```

/// One declared argument of a verb.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentSpec {
    pub name: String,
    pub description: String,
    pub optional: bool,
}

impl ArgumentSpec {
    pub fn required(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            optional: false,
        }
    }

    pub fn optional(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            optional: true,
        }
    }
}

/// Declared description and ordered arguments of one verb.
///
/// Required arguments are not forced to precede optional ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsageContract {
    description: String,
    arguments: Vec<ArgumentSpec>,
}

impl UsageContract {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            arguments: Vec::new(),
        }
    }

    /// Append an argument, keeping declaration order.
    pub fn argument(mut self, spec: ArgumentSpec) -> Self {
        self.arguments.push(spec);
        self
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn arguments(&self) -> &[ArgumentSpec] {
        &self.arguments
    }

    /// Number of arguments not marked optional.
    pub fn required_count(&self) -> usize {
        self.arguments.iter().filter(|a| !a.optional).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_contract() {
        let usage = UsageContract::new("");
        assert_eq!(usage.required_count(), 0);
        assert!(usage.arguments().is_empty());
        assert_eq!(usage.description(), "");
    }

    #[test]
    fn counts_only_required() {
        let usage = UsageContract::new("d")
            .argument(ArgumentSpec::optional("a", ""))
            .argument(ArgumentSpec::required("b", ""))
            .argument(ArgumentSpec::optional("c", ""))
            .argument(ArgumentSpec::required("d", ""));
        assert_eq!(usage.required_count(), 2);
    }

    #[test]
    fn keeps_declaration_order() {
        let usage = UsageContract::new("d")
            .argument(ArgumentSpec::required("first", ""))
            .argument(ArgumentSpec::required("second", ""));
        let names: Vec<_> = usage.arguments().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["first", "second"]);
    }
}
