//! The error type shared by every kata that may refuse its input.
//!
//! Failures are always local to a single call: nothing here is retried or fatal,
//! and a failed call leaves its inputs (including a [crate::SinglyLinkedList]) untouched.

use thiserror::Error;

/// Errors returned by the katas of this crate
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KataError {
    /// something looked up by name or key is absent
    #[error("{what} was not found")]
    NotFound { what: String },

    /// an argument is outside of the domain the algorithm is defined for
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// a positional operation referred to a position past the end of a container
    #[error("index {index} is out of range for a container of {len} element(s)")]
    IndexOutOfRange { index: usize, len: usize },
}

impl KataError {

    /// [KataError::InvalidArgument] for the argument `name`, explaining why it was refused
    pub(crate) fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument { name, reason: reason.into() }
    }

    /// [KataError::NotFound] for `what` -- a description of the missing thing, like `topic 'graphs'`
    pub(crate) fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }
}

/// Shorthand for results of fallible katas
pub type KataResult<T> = Result<T, KataError>;
