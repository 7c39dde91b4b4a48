use thiserror::Error;

use crate::parser::ParseError;

/// Input that parses but does not describe a permutation of some Sn.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("no cycles given")]
    Empty,

    /// `offset` is the character offset in parsed text, or the element's
    /// position for cycles built directly.
    #[error("element {value} at offset {offset} is not a positive integer")]
    NonPositive { value: i64, offset: usize },

    #[error("element {element} appears more than once in one cycle")]
    RepeatedElement { element: usize },

    #[error("degree {degree} exceeds the configured maximum of {max}")]
    DegreeTooLarge { degree: usize, max: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A table that should have been a bijection was not.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}
