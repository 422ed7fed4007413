//! engine::validate
//!
//! Argument-count validation against a usage contract.
//!
//! Only the number of required arguments is checked. Extra arguments are
//! always accepted, and argument values are never type-checked.
//!
//! Verbs that reject their arguments themselves return an [`ArgumentError`]
//! through `anyhow`. The invoker treats that the same as a failed count
//! check and shows usage help instead of the error text.

use thiserror::Error;

use crate::core::usage::UsageContract;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("expected at least {required} argument(s), got {supplied}")]
    TooFew { required: usize, supplied: usize },

    #[error("invalid argument: {0}")]
    Invalid(String),
}

impl ArgumentError {
    /// Error for a verb that cannot use the arguments it was given.
    pub fn invalid(message: impl Into<String>) -> Self {
        ArgumentError::Invalid(message.into())
    }
}

/// Check supplied arguments against an optional contract.
///
/// Without a contract every argument count passes.
pub fn validate_arguments(usage: Option<&UsageContract>, args: &[String]) -> Result<(), ArgumentError> {
    let Some(usage) = usage else {
        return Ok(());
    };

    let required = usage.required_count();
    if required > args.len() {
        return Err(ArgumentError::TooFew {
            required,
            supplied: args.len(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::usage::ArgumentSpec;

    fn args(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("a{i}")).collect()
    }

    fn contract(required: usize, optional: usize) -> UsageContract {
        let mut usage = UsageContract::new("test");
        for i in 0..required {
            usage = usage.argument(ArgumentSpec::required(format!("r{i}"), ""));
        }
        for i in 0..optional {
            usage = usage.argument(ArgumentSpec::optional(format!("o{i}"), ""));
        }
        usage
    }

    #[test]
    fn no_contract_accepts_anything() {
        assert!(validate_arguments(None, &[]).is_ok());
        assert!(validate_arguments(None, &args(7)).is_ok());
    }

    #[test]
    fn too_few_rejected() {
        let usage = contract(2, 1);
        assert_eq!(
            validate_arguments(Some(&usage), &args(1)),
            Err(ArgumentError::TooFew {
                required: 2,
                supplied: 1
            })
        );
    }

    #[test]
    fn invalid_message() {
        assert_eq!(
            ArgumentError::invalid("port must be a number").to_string(),
            "invalid argument: port must be a number"
        );
    }

    #[test]
    fn optional_not_required() {
        let usage = contract(1, 3);
        assert!(validate_arguments(Some(&usage), &args(1)).is_ok());
    }

    #[test]
    fn extra_accepted() {
        let usage = contract(1, 0);
        assert!(validate_arguments(Some(&usage), &args(5)).is_ok());
    }

    #[test]
    fn only_optional_accepts_none() {
        let usage = contract(0, 2);
        assert!(validate_arguments(Some(&usage), &[]).is_ok());
    }

    #[test]
    fn optional_before_required_counts_the_same() {
        let usage = UsageContract::new("loose")
            .argument(ArgumentSpec::optional("o", ""))
            .argument(ArgumentSpec::required("r", ""));
        assert!(validate_arguments(Some(&usage), &args(1)).is_ok());
        assert!(validate_arguments(Some(&usage), &[]).is_err());
    }
}
