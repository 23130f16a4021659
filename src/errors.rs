//! # Errors
//!
//! The generators in this crate never fail on user input: a bad value drops
//! the predicate it would have produced, and a bad page parameter falls back
//! to the configured default. [`QueryError`] exists for the few lower-level
//! entry points that callers may want to use directly, such as
//! [`parse_conditions`](crate::filtering::parse_conditions) and
//! [`Operator::from_str`](crate::filtering::Operator), and is what the
//! generators catch and log before degrading.

use std::fmt;

/// Error raised while decoding raw filter input.
#[derive(Debug)]
pub enum QueryError {
    /// The conditional filter string was not valid JSON
    InvalidJson(serde_json::Error),

    /// An operator name that does not map to a known comparison operator
    UnknownOperator {
        /// The name as it was received
        name: String,
    },

    /// Decoded condition input was valid JSON but not a list of conditions
    NotAnArray,
}

impl QueryError {
    /// Create an unknown-operator error
    pub fn unknown_operator(name: impl Into<String>) -> Self {
        Self::UnknownOperator { name: name.into() }
    }
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidJson(err) => write!(f, "invalid condition JSON: {err}"),
            Self::UnknownOperator { name } => write!(f, "unknown comparison operator '{name}'"),
            Self::NotAnArray => write!(f, "condition input must be a JSON array"),
        }
    }
}

impl std::error::Error for QueryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidJson(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for QueryError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidJson(err)
    }
}
