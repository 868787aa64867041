//! Errors from parsing command-line parameter values.

use thiserror::Error;

/// Why a parameter value was refused.
#[derive(Debug, Error)]
pub enum ParamError {
    #[error("blank argument where content is expected")]
    BlankString,

    #[error("expected a proper numerical parameter")]
    BadNumeric,

    #[error("the given number is too large")]
    NumberTooLarge,

    #[error("negative numbers are not allowed here")]
    NegativeNumeric,

    #[error("bad use of an option")]
    BadUse,

    #[error("option requires a parameter")]
    RequiresParameter,

    #[error("protocol '{0}' is not supported")]
    UnsupportedProtocol(String),

    #[error("credentials exceed {limit} bytes")]
    CredentialTooLong { limit: usize },

    #[error("password prompt failed: {0}")]
    Prompt(#[source] std::io::Error),
}
