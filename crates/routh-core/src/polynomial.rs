//! Univariate polynomials with exact rational coefficients
//!
//! A [`Polynomial`] is the input of every analysis. It is immutable once
//! constructed and always has a well-defined degree: the zero polynomial is
//! rejected at construction time.

use crate::error::{Error, Result};
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};
use std::fmt;

/// A univariate polynomial over Q, tagged with the name of its variable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polynomial {
    variable: String,
    /// Coefficients in increasing power order: a_0 + a_1*x + a_2*x^2 + ...
    coefficients: Vec<BigRational>,
}

impl Polynomial {
    /// Create a polynomial from coefficients in increasing power order
    ///
    /// Trailing zero coefficients are dropped. Returns
    /// [`Error::ZeroPolynomial`] if no coefficient is non-zero.
    pub fn new(variable: impl Into<String>, mut coefficients: Vec<BigRational>) -> Result<Self> {
        while coefficients.last().is_some_and(|c| c.is_zero()) {
            coefficients.pop();
        }
        if coefficients.is_empty() {
            return Err(Error::ZeroPolynomial);
        }
        Ok(Self {
            variable: variable.into(),
            coefficients,
        })
    }

    /// Create a polynomial from a power -> coefficient mapping
    ///
    /// Missing powers are zero; repeated powers are summed.
    pub fn from_terms<I>(variable: impl Into<String>, terms: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, BigRational)>,
    {
        let mut coefficients: Vec<BigRational> = Vec::new();
        for (power, coeff) in terms {
            if coefficients.len() <= power {
                coefficients.resize(power + 1, BigRational::zero());
            }
            coefficients[power] += coeff;
        }
        Self::new(variable, coefficients)
    }

    /// Create a polynomial from integer coefficients, highest power first
    ///
    /// `Polynomial::from_integers("x", &[1, 3, 3, 1])` is `x^3 + 3x^2 + 3x + 1`.
    pub fn from_integers(variable: impl Into<String>, descending: &[i64]) -> Result<Self> {
        let coefficients = descending
            .iter()
            .rev()
            .map(|&c| BigRational::from_integer(BigInt::from(c)))
            .collect();
        Self::new(variable, coefficients)
    }

    /// Name of the polynomial's variable
    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// Highest power with a non-zero coefficient
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Coefficients in increasing power order
    pub fn coefficients(&self) -> &[BigRational] {
        &self.coefficients
    }

    /// Coefficient of `x^power`
    ///
    /// Fails with [`Error::PowerOutOfRange`] for a negative power or a power
    /// above the degree.
    pub fn coefficient(&self, power: i64) -> Result<&BigRational> {
        usize::try_from(power)
            .ok()
            .and_then(|p| self.coefficients.get(p))
            .ok_or(Error::PowerOutOfRange {
                power,
                degree: self.degree(),
            })
    }

    /// Coefficient of the highest power; never zero
    pub fn leading_coefficient(&self) -> &BigRational {
        &self.coefficients[self.degree()]
    }

    /// Coefficient of `x^0`
    pub fn constant_term(&self) -> &BigRational {
        &self.coefficients[0]
    }

    /// Evaluate the polynomial at a point using Horner's method
    pub fn evaluate(&self, x: &BigRational) -> BigRational {
        self.coefficients
            .iter()
            .rev()
            .fold(BigRational::zero(), |acc, c| acc * x + c)
    }

    /// The same polynomial multiplied by -1; its roots are unchanged
    pub fn negated(&self) -> Self {
        Self {
            variable: self.variable.clone(),
            coefficients: self.coefficients.iter().map(|c| -c).collect(),
        }
    }

    /// Coefficients as floats, in increasing power order
    pub fn to_f64_coefficients(&self) -> Result<Vec<f64>> {
        self.coefficients
            .iter()
            .enumerate()
            .map(|(power, c)| {
                c.to_f64()
                    .filter(|v| v.is_finite())
                    .ok_or_else(|| Error::non_finite(&format!("coefficient of {}^{power}", self.variable)))
            })
            .collect()
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_polynomial(f, &self.coefficients, &self.variable)
    }
}

/// Write `coefficients` (increasing power order) as a sum of terms in `variable`
pub(crate) fn write_polynomial(
    f: &mut fmt::Formatter<'_>,
    coefficients: &[BigRational],
    variable: &str,
) -> fmt::Result {
    let mut first = true;
    for (power, coeff) in coefficients.iter().enumerate().rev() {
        if coeff.is_zero() {
            continue;
        }
        let magnitude = coeff.abs();
        if first {
            if coeff.is_negative() {
                write!(f, "-")?;
            }
        } else if coeff.is_negative() {
            write!(f, " - ")?;
        } else {
            write!(f, " + ")?;
        }
        first = false;

        let unit = magnitude.is_one() && power > 0;
        if !unit {
            if magnitude.is_integer() || power == 0 {
                write!(f, "{magnitude}")?;
            } else {
                write!(f, "({magnitude})")?;
            }
        }
        match power {
            0 => {}
            1 => write!(f, "{variable}")?,
            _ => write!(f, "{variable}^{power}")?,
        }
    }
    if first {
        write!(f, "0")?;
    }
    Ok(())
}
