//! Expressions over the infinitesimal marker ε
//!
//! Routh array cells are exact rational functions of a single symbol ε that
//! stands for a positive quantity tending to zero. Constant cells carry no ε
//! at all; the marker is introduced when a pivot would otherwise be zero and
//! is eliminated by taking the limit ε → 0⁺ when results are reported.
//!
//! Every value is kept in lowest terms: numerator and denominator share no
//! common factor and the denominator's highest-order coefficient is one. This
//! keeps structural equality meaningful (`ε * 2 / 2 == ε`) and keeps the
//! expressions from growing row after row.

use crate::error::{Error, Result};
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Symbol used when printing ε-expressions
pub const EPSILON_SYMBOL: &str = "ε";

/// Sign of a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

impl Sign {
    fn of(value: &BigRational) -> Self {
        if value.is_positive() {
            Sign::Positive
        } else if value.is_negative() {
            Sign::Negative
        } else {
            Sign::Zero
        }
    }

    fn flip(self) -> Self {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Zero => Sign::Zero,
            Sign::Positive => Sign::Negative,
        }
    }
}

/// Limit of an ε-expression as ε → 0⁺
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Limit {
    Finite(BigRational),
    PositiveInfinity,
    NegativeInfinity,
}

impl Limit {
    /// Sign of the limit; infinities carry their direction
    pub fn signum(&self) -> Sign {
        match self {
            Limit::Finite(value) => Sign::of(value),
            Limit::PositiveInfinity => Sign::Positive,
            Limit::NegativeInfinity => Sign::Negative,
        }
    }

    /// Whether the limit is a strictly positive number or +∞
    pub fn is_positive(&self) -> bool {
        self.signum() == Sign::Positive
    }

    /// Whether the limit is exactly zero
    pub fn is_zero(&self) -> bool {
        matches!(self, Limit::Finite(value) if value.is_zero())
    }

    /// The finite value, if there is one
    pub fn as_finite(&self) -> Option<&BigRational> {
        match self {
            Limit::Finite(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Limit::Finite(value) => write!(f, "{value}"),
            Limit::PositiveInfinity => write!(f, "∞"),
            Limit::NegativeInfinity => write!(f, "-∞"),
        }
    }
}

/// Exact rational function of ε
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpsilonExpr {
    /// Numerator coefficients in increasing powers of ε, without trailing zeros
    numerator: Vec<BigRational>,
    /// Denominator coefficients in increasing powers of ε; never empty, monic
    denominator: Vec<BigRational>,
}

impl EpsilonExpr {
    /// The constant zero
    pub fn zero() -> Self {
        Self {
            numerator: Vec::new(),
            denominator: vec![BigRational::one()],
        }
    }

    /// The infinitesimal marker ε itself
    pub fn marker() -> Self {
        Self {
            numerator: vec![BigRational::zero(), BigRational::one()],
            denominator: vec![BigRational::one()],
        }
    }

    /// A constant with no ε dependence
    pub fn constant(value: BigRational) -> Self {
        let mut numerator = vec![value];
        trim(&mut numerator);
        Self {
            numerator,
            denominator: vec![BigRational::one()],
        }
    }

    /// Whether the expression is identically zero
    pub fn is_zero(&self) -> bool {
        self.numerator.is_empty()
    }

    /// Whether the expression is literally the marker ε
    pub fn is_marker(&self) -> bool {
        *self == Self::marker()
    }

    /// The value when the expression does not depend on ε
    pub fn as_constant(&self) -> Option<BigRational> {
        match (self.numerator.len(), self.denominator.len()) {
            (0, 1) => Some(BigRational::zero()),
            (1, 1) => Some(&self.numerator[0] / &self.denominator[0]),
            _ => None,
        }
    }

    /// Multiply by a rational constant
    pub fn scale(&self, factor: &BigRational) -> Self {
        Self::normalized(
            self.numerator.iter().map(|c| c * factor).collect(),
            self.denominator.clone(),
        )
    }

    /// Divide by another expression
    ///
    /// Fails with [`Error::DivisionByZero`] when the divisor is identically
    /// zero. A divisor whose *limit* is zero but which still depends on ε is
    /// a valid divisor.
    pub fn checked_div(&self, divisor: &Self) -> Result<Self> {
        if divisor.is_zero() {
            return Err(Error::DivisionByZero(format!("({self}) / 0")));
        }
        Ok(Self::normalized(
            poly_mul(&self.numerator, &divisor.denominator),
            poly_mul(&self.denominator, &divisor.numerator),
        ))
    }

    /// Limit as ε → 0⁺
    pub fn limit(&self) -> Limit {
        let Some((num_order, num_low)) = lowest_term(&self.numerator) else {
            return Limit::Finite(BigRational::zero());
        };
        let Some((den_order, den_low)) = lowest_term(&self.denominator) else {
            return Limit::Finite(BigRational::zero());
        };
        match num_order.cmp(&den_order) {
            std::cmp::Ordering::Greater => Limit::Finite(BigRational::zero()),
            std::cmp::Ordering::Equal => Limit::Finite(num_low / den_low),
            std::cmp::Ordering::Less => {
                if num_low.is_positive() == den_low.is_positive() {
                    Limit::PositiveInfinity
                } else {
                    Limit::NegativeInfinity
                }
            }
        }
    }

    /// Sign of the value for ε small and positive
    ///
    /// Unlike [`Limit::signum`] this never returns [`Sign::Zero`] for a
    /// non-zero expression: `2ε` is positive here while its limit is zero.
    pub fn sign_near_zero(&self) -> Sign {
        match (lowest_term(&self.numerator), lowest_term(&self.denominator)) {
            (Some((_, n)), Some((_, d))) => {
                let sign = Sign::of(n);
                if d.is_negative() {
                    sign.flip()
                } else {
                    sign
                }
            }
            _ => Sign::Zero,
        }
    }

    fn normalized(mut numerator: Vec<BigRational>, mut denominator: Vec<BigRational>) -> Self {
        trim(&mut numerator);
        trim(&mut denominator);
        if numerator.is_empty() {
            return Self::zero();
        }

        let common = poly_gcd(&numerator, &denominator);
        if common.len() > 1 {
            numerator = poly_div_exact(&numerator, &common);
            denominator = poly_div_exact(&denominator, &common);
        }

        if let Some(lead) = denominator.last().cloned() {
            if !lead.is_one() {
                numerator.iter_mut().for_each(|c| *c /= &lead);
                denominator.iter_mut().for_each(|c| *c /= &lead);
            }
        }
        Self {
            numerator,
            denominator,
        }
    }
}

impl Default for EpsilonExpr {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<BigRational> for EpsilonExpr {
    fn from(value: BigRational) -> Self {
        Self::constant(value)
    }
}

impl Add for &EpsilonExpr {
    type Output = EpsilonExpr;

    fn add(self, rhs: &EpsilonExpr) -> EpsilonExpr {
        if self.denominator == rhs.denominator {
            return EpsilonExpr::normalized(
                poly_add(&self.numerator, &rhs.numerator),
                self.denominator.clone(),
            );
        }
        EpsilonExpr::normalized(
            poly_add(
                &poly_mul(&self.numerator, &rhs.denominator),
                &poly_mul(&rhs.numerator, &self.denominator),
            ),
            poly_mul(&self.denominator, &rhs.denominator),
        )
    }
}

impl Neg for &EpsilonExpr {
    type Output = EpsilonExpr;

    fn neg(self) -> EpsilonExpr {
        EpsilonExpr {
            numerator: self.numerator.iter().map(|c| -c).collect(),
            denominator: self.denominator.clone(),
        }
    }
}

impl Neg for EpsilonExpr {
    type Output = EpsilonExpr;

    fn neg(self) -> EpsilonExpr {
        -&self
    }
}

impl Sub for &EpsilonExpr {
    type Output = EpsilonExpr;

    fn sub(self, rhs: &EpsilonExpr) -> EpsilonExpr {
        self + &(-rhs)
    }
}

impl Mul for &EpsilonExpr {
    type Output = EpsilonExpr;

    fn mul(self, rhs: &EpsilonExpr) -> EpsilonExpr {
        if self.is_zero() || rhs.is_zero() {
            return EpsilonExpr::zero();
        }
        EpsilonExpr::normalized(
            poly_mul(&self.numerator, &rhs.numerator),
            poly_mul(&self.denominator, &rhs.denominator),
        )
    }
}

impl fmt::Display for EpsilonExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(value) = self.as_constant() {
            return write!(f, "{value}");
        }
        let numerator_terms = self.numerator.iter().filter(|c| !c.is_zero()).count();
        if self.denominator.len() == 1 {
            // Polynomial in ε; the denominator is the constant one
            return crate::polynomial::write_polynomial(f, &self.numerator, EPSILON_SYMBOL);
        }
        if numerator_terms > 1 {
            write!(f, "(")?;
            crate::polynomial::write_polynomial(f, &self.numerator, EPSILON_SYMBOL)?;
            write!(f, ")")?;
        } else {
            crate::polynomial::write_polynomial(f, &self.numerator, EPSILON_SYMBOL)?;
        }
        write!(f, "/")?;
        if self.denominator.iter().filter(|c| !c.is_zero()).count() > 1 {
            write!(f, "(")?;
            crate::polynomial::write_polynomial(f, &self.denominator, EPSILON_SYMBOL)?;
            write!(f, ")")
        } else {
            crate::polynomial::write_polynomial(f, &self.denominator, EPSILON_SYMBOL)
        }
    }
}

fn trim(coefficients: &mut Vec<BigRational>) {
    while coefficients.last().is_some_and(|c| c.is_zero()) {
        coefficients.pop();
    }
}

/// Order and coefficient of the lowest-order non-zero term
fn lowest_term(coefficients: &[BigRational]) -> Option<(usize, &BigRational)> {
    coefficients.iter().enumerate().find(|(_, c)| !c.is_zero())
}

fn poly_add(a: &[BigRational], b: &[BigRational]) -> Vec<BigRational> {
    let len = a.len().max(b.len());
    let mut out = Vec::with_capacity(len);
    for i in 0..len {
        let sum = match (a.get(i), b.get(i)) {
            (Some(x), Some(y)) => x + y,
            (Some(x), None) | (None, Some(x)) => x.clone(),
            (None, None) => BigRational::zero(),
        };
        out.push(sum);
    }
    trim(&mut out);
    out
}

fn poly_mul(a: &[BigRational], b: &[BigRational]) -> Vec<BigRational> {
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
    trim(&mut out);
    out
}

/// Polynomial long division; `divisor` must be non-empty and trimmed
fn poly_divrem(dividend: &[BigRational], divisor: &[BigRational]) -> (Vec<BigRational>, Vec<BigRational>) {
    let mut remainder = dividend.to_vec();
    trim(&mut remainder);
    let Some(lead) = divisor.last() else {
        return (Vec::new(), remainder);
    };
    if remainder.len() < divisor.len() {
        return (Vec::new(), remainder);
    }

    let mut quotient = vec![BigRational::zero(); remainder.len() - divisor.len() + 1];
    while remainder.len() >= divisor.len() && !remainder.is_empty() {
        let shift = remainder.len() - divisor.len();
        let factor = &remainder[remainder.len() - 1] / lead;
        for (i, d) in divisor.iter().enumerate() {
            remainder[shift + i] -= &factor * d;
        }
        quotient[shift] = factor;
        // The top coefficient cancels exactly
        remainder.pop();
        trim(&mut remainder);
    }
    trim(&mut quotient);
    (quotient, remainder)
}

fn poly_div_exact(dividend: &[BigRational], divisor: &[BigRational]) -> Vec<BigRational> {
    poly_divrem(dividend, divisor).0
}

/// Monic greatest common divisor of two non-zero polynomials
fn poly_gcd(a: &[BigRational], b: &[BigRational]) -> Vec<BigRational> {
    let mut x = a.to_vec();
    let mut y = b.to_vec();
    while !y.is_empty() {
        let (_, r) = poly_divrem(&x, &y);
        x = y;
        y = r;
    }
    if let Some(lead) = x.last().cloned() {
        x.iter_mut().for_each(|c| *c /= &lead);
    }
    x
}
