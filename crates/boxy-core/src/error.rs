//! Error types for Boxy core utilities.

use thiserror::Error;

/// Errors raised while parsing or converting lengths.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UnitError {
    /// The text is not a number in the expected notation
    #[error("Invalid number '{input}'")]
    InvalidNumber {
        /// The offending input.
        input: String,
    },

    /// A fraction did not have the `numerator/denominator` form
    #[error("Invalid fraction '{input}'")]
    InvalidFraction {
        /// The offending input.
        input: String,
    },

    /// A fraction had a zero denominator
    #[error("Division by zero in '{input}'")]
    DivisionByZero {
        /// The offending input.
        input: String,
    },

    /// The measurement system name is not recognised
    #[error("Unknown measurement system: {0}")]
    UnknownSystem(String),
}
