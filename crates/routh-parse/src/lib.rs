//! # Routh Parse
//!
//! Turns polynomial expressions such as `s^3 + 2s^2 + 3s + 1` or
//! `(x + 1)^2 (x - 0.5)` into an exact [`routh_core::Polynomial`].
//!
//! Decimals are read exactly (`0.1` is `1/10`), `**` is accepted for `^`,
//! and juxtaposition multiplies. Division is allowed by non-zero constants
//! only.
//!
//! ```rust
//! use routh_parse::parse_polynomial;
//!
//! let p = parse_polynomial("s^3 + 2s^2 + s + 2").unwrap();
//! assert_eq!(p.variable(), "s");
//! assert_eq!(p.degree(), 3);
//! ```

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;

pub use ast::{BinaryOp, Expr};
pub use error::{ParseError, Result};
pub use parser::parse_expression;

use routh_core::Polynomial;
use tracing::debug;

/// Largest exponent accepted in an expression, and largest degree any
/// product or power in it may expand to
pub const MAX_EXPONENT: u32 = 1000;

/// Parse an expression with exactly one free variable
///
/// The variable is inferred from the expression. A constant expression is
/// rejected with [`ParseError::NoVariable`] and one with several variables
/// with [`ParseError::TooManyVariables`].
pub fn parse_polynomial(input: &str) -> Result<Polynomial> {
    let expr = parse_expression(input)?;
    let mut names = expr.variables().into_iter();
    let variable = match (names.next(), names.next()) {
        (None, _) => return Err(ParseError::NoVariable),
        (Some(name), None) => name,
        (Some(first), Some(second)) => {
            let all = [first, second].into_iter().chain(names).collect();
            return Err(ParseError::TooManyVariables(all));
        }
    };
    build(&expr, variable)
}

/// Parse an expression in the given variable
///
/// The expression may use `variable` or no variable at all; a constant
/// yields a degree-0 polynomial.
pub fn parse_polynomial_in(input: &str, variable: &str) -> Result<Polynomial> {
    if !is_identifier(variable) {
        return Err(ParseError::InvalidVariableName(variable.to_string()));
    }
    let expr = parse_expression(input)?;
    if let Some(other) = expr.variables().into_iter().find(|name| name != variable) {
        return Err(ParseError::UnknownVariable {
            found: other,
            expected: variable.to_string(),
        });
    }
    build(&expr, variable.to_string())
}

fn build(expr: &Expr, variable: String) -> Result<Polynomial> {
    let polynomial = Polynomial::new(variable, expr.expand()?)?;
    debug!(%polynomial, degree = polynomial.degree(), "parsed polynomial");
    Ok(polynomial)
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_')
}
