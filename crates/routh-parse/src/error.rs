//! Error types for polynomial parsing

use thiserror::Error;

/// Errors raised while turning text into a polynomial
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// A character that cannot start any token
    #[error("Unexpected character '{character}' at position {position}")]
    UnexpectedCharacter { character: char, position: usize },

    /// A token that does not fit the grammar where it appears
    #[error("Unexpected '{found}' at position {position}")]
    UnexpectedToken { found: String, position: usize },

    /// The input ended in the middle of an expression
    #[error("Unexpected end of input")]
    UnexpectedEnd,

    /// A numeric literal such as `1.` or `1.2.3`
    #[error("Malformed number '{literal}' at position {position}")]
    MalformedNumber { literal: String, position: usize },

    /// An exponent that is not a non-negative integer
    #[error("Exponent {exponent} at position {position} is not a non-negative integer")]
    InvalidExponent { exponent: String, position: usize },

    /// An exponent above [`crate::MAX_EXPONENT`]
    #[error("Exponent {exponent} at position {position} exceeds the maximum of {max}")]
    ExponentTooLarge {
        exponent: String,
        position: usize,
        max: u32,
    },

    /// A product or power whose expanded degree exceeds [`crate::MAX_EXPONENT`]
    #[error("Expression at position {position} expands to degree {degree}, above the maximum of {max}")]
    DegreeTooLarge {
        degree: u64,
        position: usize,
        max: u32,
    },

    /// Division by an expression that depends on the variable
    #[error("Division by a non-constant expression at position {position}")]
    NonConstantDivisor { position: usize },

    /// Division by a constant that evaluates to zero
    #[error("Division by zero at position {position}")]
    DivisionByZero { position: usize },

    /// The expression has no free variable and none was given
    #[error("Expression has no variable")]
    NoVariable,

    /// The expression has more than one free variable
    #[error("Too many variables in polynomial: {}", .0.join(", "))]
    TooManyVariables(Vec<String>),

    /// A free variable other than the requested one
    #[error("Unknown variable '{found}', expected '{expected}'")]
    UnknownVariable { found: String, expected: String },

    /// The requested variable name is not an identifier
    #[error("Invalid variable name '{0}'")]
    InvalidVariableName(String),

    /// Error raised while building the polynomial itself
    #[error(transparent)]
    Core(#[from] routh_core::Error),
}

/// Result type alias using [`ParseError`]
pub type Result<T> = std::result::Result<T, ParseError>;

impl ParseError {
    /// Create an error for a token found where it does not belong
    pub fn unexpected(found: impl Into<String>, position: usize) -> Self {
        Self::UnexpectedToken {
            found: found.into(),
            position,
        }
    }
}
