//! Expression tree and its expansion into dense coefficients

use crate::error::{ParseError, Result};
use crate::MAX_EXPONENT;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};
use std::collections::BTreeSet;
use std::fmt;

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryOp {
    fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Pow => "^",
        }
    }
}

/// Parsed polynomial expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Number(BigRational),
    Variable(String),
    Neg(Box<Expr>),
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
        /// Offset of the right operand in the input, for error reporting
        position: usize,
    },
}

impl Expr {
    pub(crate) fn binary(op: BinaryOp, lhs: Expr, rhs: Expr, position: usize) -> Self {
        Expr::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
            position,
        }
    }

    /// Names of all free variables, sorted
    pub fn variables(&self) -> BTreeSet<String> {
        let mut names = BTreeSet::new();
        self.collect_variables(&mut names);
        names
    }

    fn collect_variables(&self, names: &mut BTreeSet<String>) {
        match self {
            Expr::Number(_) => {}
            Expr::Variable(name) => {
                names.insert(name.clone());
            }
            Expr::Neg(inner) => inner.collect_variables(names),
            Expr::Binary { lhs, rhs, .. } => {
                lhs.collect_variables(names);
                rhs.collect_variables(names);
            }
        }
    }

    /// Expand into coefficients in increasing power order
    ///
    /// Every variable is read as the same indeterminate, so callers check the
    /// variable set first. The result carries no trailing zeros and is empty
    /// for the zero polynomial.
    pub fn expand(&self) -> Result<Vec<BigRational>> {
        let coefficients = match self {
            Expr::Number(value) => vec![value.clone()],
            Expr::Variable(_) => vec![BigRational::zero(), BigRational::one()],
            Expr::Neg(inner) => inner.expand()?.into_iter().map(|c| -c).collect(),
            Expr::Binary {
                op,
                lhs,
                rhs,
                position,
            } => {
                let left = lhs.expand()?;
                match op {
                    BinaryOp::Add => add(&left, &rhs.expand()?, false),
                    BinaryOp::Sub => add(&left, &rhs.expand()?, true),
                    BinaryOp::Mul => {
                        let right = rhs.expand()?;
                        check_degree(degree(&left) + degree(&right), *position)?;
                        multiply(&left, &right)
                    }
                    BinaryOp::Div => {
                        let divisor = constant_value(&rhs.expand()?)
                            .ok_or(ParseError::NonConstantDivisor { position: *position })?;
                        if divisor.is_zero() {
                            return Err(ParseError::DivisionByZero { position: *position });
                        }
                        left.iter().map(|c| c / &divisor).collect()
                    }
                    BinaryOp::Pow => {
                        let exponent = exponent_value(rhs, *position)?;
                        check_degree(degree(&left) * u64::from(exponent), *position)?;
                        power(&left, exponent)
                    }
                }
            }
        };
        Ok(trim(coefficients))
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(value) if value.is_integer() => write!(f, "{value}"),
            Expr::Number(value) => write!(f, "({value})"),
            Expr::Variable(name) => write!(f, "{name}"),
            Expr::Neg(inner) => write!(f, "-{inner}"),
            Expr::Binary { op, lhs, rhs, .. } => write!(f, "({lhs} {} {rhs})", op.symbol()),
        }
    }
}

/// Value of an exponent, which must be a constant non-negative integer
fn exponent_value(rhs: &Expr, position: usize) -> Result<u32> {
    let invalid = || ParseError::InvalidExponent {
        exponent: rhs.to_string(),
        position,
    };
    let value = constant_value(&rhs.expand()?).ok_or_else(invalid)?;
    if !value.is_integer() || value.is_negative() {
        return Err(invalid());
    }
    match value.to_integer().to_u32() {
        Some(exponent) if exponent <= MAX_EXPONENT => Ok(exponent),
        _ => Err(ParseError::ExponentTooLarge {
            exponent: value.to_string(),
            position,
            max: MAX_EXPONENT,
        }),
    }
}

/// Degree of a trimmed coefficient vector; the zero polynomial counts as 0
fn degree(coefficients: &[BigRational]) -> u64 {
    coefficients.len().saturating_sub(1) as u64
}

/// Reject a product whose degree would exceed [`MAX_EXPONENT`]
fn check_degree(degree: u64, position: usize) -> Result<()> {
    if degree > u64::from(MAX_EXPONENT) {
        return Err(ParseError::DegreeTooLarge {
            degree,
            position,
            max: MAX_EXPONENT,
        });
    }
    Ok(())
}

/// Value of a coefficient vector that has no variable part
fn constant_value(coefficients: &[BigRational]) -> Option<BigRational> {
    match coefficients {
        [] => Some(BigRational::zero()),
        [value] => Some(value.clone()),
        _ => None,
    }
}

fn trim(mut coefficients: Vec<BigRational>) -> Vec<BigRational> {
    while coefficients.last().is_some_and(Zero::is_zero) {
        coefficients.pop();
    }
    coefficients
}

fn add(a: &[BigRational], b: &[BigRational], subtract: bool) -> Vec<BigRational> {
    let len = a.len().max(b.len());
    (0..len)
        .map(|i| {
            let x = a.get(i).cloned().unwrap_or_else(BigRational::zero);
            let y = b.get(i).cloned().unwrap_or_else(BigRational::zero);
            if subtract {
                x - y
            } else {
                x + y
            }
        })
        .collect()
}

fn multiply(a: &[BigRational], b: &[BigRational]) -> Vec<BigRational> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let mut out = vec![BigRational::zero(); a.len() + b.len() - 1];
    for (i, x) in a.iter().enumerate() {
        if x.is_zero() {
            continue;
        }
        for (j, y) in b.iter().enumerate() {
            out[i + j] += x * y;
        }
    }
    out
}

/// `base^exponent` by repeated squaring; `anything^0` is 1
fn power(base: &[BigRational], mut exponent: u32) -> Vec<BigRational> {
    let mut result = vec![BigRational::from_integer(BigInt::one())];
    let mut square = base.to_vec();
    while exponent > 0 {
        if exponent & 1 == 1 {
            result = trim(multiply(&result, &square));
        }
        exponent >>= 1;
        if exponent > 0 {
            square = trim(multiply(&square, &square));
        }
    }
    result
}
