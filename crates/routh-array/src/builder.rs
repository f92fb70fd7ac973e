//! Routh array construction
//!
//! The array is seeded with the polynomial's coefficients (row 0 holds the
//! powers `n, n-2, ...`, row 1 the powers `n-1, n-3, ...`) and completed top
//! down with the classical cross-multiplication recurrence
//!
//! ```text
//! entry(p, j) = -(A[0]·B[j+1] - B[0]·A[j+1]) / B[0]
//! ```
//!
//! where `A` and `B` are the rows for powers `p + 2` and `p + 1`.
//!
//! Two degenerate situations are resolved as they appear, for row 1 and
//! every computed row:
//!
//! - **Zero pivot**: the first entry tends to zero while the rest of the row
//!   does not. The entry becomes the infinitesimal marker ε, which keeps the
//!   next division well defined.
//! - **Zero row**: every entry tends to zero. The row above is read as the
//!   auxiliary polynomial `B[0]·x^(p+1) + B[1]·x^(p-1) + ...` and the row is
//!   replaced by the coefficients of its derivative.

use crate::array::{column_count, Degeneracy, RouthArray};
use num_bigint::BigInt;
use num_rational::BigRational;
use routh_core::{EpsilonExpr, Error, Polynomial, Result};
use tracing::{debug, instrument, trace};

/// Build the complete Routh array of `polynomial`
///
/// The result is a fresh value; nothing is shared between calls.
#[instrument(skip(polynomial), fields(degree = polynomial.degree()))]
pub fn build_routh_array(polynomial: &Polynomial) -> Result<RouthArray> {
    let degree = polynomial.degree();
    let mut rows = seed_rows(polynomial)?;
    let mut degeneracies = Vec::new();

    if degree >= 1 {
        // Row 1 comes straight from the coefficients but can still be degenerate
        let (above, current) = rows.split_at_mut(1);
        if let Some(event) = resolve_degeneracy(&above[0], &mut current[0], degree - 1) {
            degeneracies.push(event);
        }
    }

    for power in (0..degree.saturating_sub(1)).rev() {
        let index = degree - power;
        let row = complete_row(&rows[index - 2], &rows[index - 1])
            .map_err(|_| Error::zero_pivot(power))?;
        rows[index] = row;

        let (above, current) = rows.split_at_mut(index);
        if let Some(event) = resolve_degeneracy(&above[index - 1], &mut current[0], power) {
            degeneracies.push(event);
        }
        trace!(power, row = %DisplayRow(&rows[index]), "completed row");
    }

    Ok(RouthArray::new(
        polynomial.variable().to_string(),
        degree,
        rows,
        degeneracies,
    ))
}

/// Rows 0 and 1 filled from the coefficients; every other row is zero
pub fn seed_rows(polynomial: &Polynomial) -> Result<Vec<Vec<EpsilonExpr>>> {
    let degree = polynomial.degree();
    let columns = column_count(degree);
    let mut rows = vec![vec![EpsilonExpr::zero(); columns]; degree + 1];

    for (offset, row) in rows.iter_mut().take(2).enumerate() {
        for (column, cell) in row.iter_mut().enumerate() {
            let power = degree as i64 - offset as i64 - 2 * column as i64;
            if power >= 0 {
                *cell = EpsilonExpr::constant(polynomial.coefficient(power)?.clone());
            }
        }
    }
    Ok(rows)
}

/// One step of the recurrence: the row below `upper` and `pivot_row`
///
/// The last column is always zero. Fails with [`Error::DivisionByZero`]
/// when the pivot `pivot_row[0]` is identically zero.
pub fn complete_row(upper: &[EpsilonExpr], pivot_row: &[EpsilonExpr]) -> Result<Vec<EpsilonExpr>> {
    let columns = upper.len();
    let mut row = vec![EpsilonExpr::zero(); columns];
    let (Some(a0), Some(pivot)) = (upper.first(), pivot_row.first()) else {
        return Ok(row);
    };

    for (j, cell) in row.iter_mut().enumerate().take(columns.saturating_sub(1)) {
        let zero = EpsilonExpr::zero();
        let a_next = upper.get(j + 1).unwrap_or(&zero);
        let b_next = pivot_row.get(j + 1).unwrap_or(&zero);
        let determinant = &(a0 * b_next) - &(pivot * a_next);
        *cell = (-determinant).checked_div(pivot)?;
    }
    Ok(row)
}

/// Apply the zero-pivot or zero-row rule to `row`, the row for `power`
fn resolve_degeneracy(
    above: &[EpsilonExpr],
    row: &mut [EpsilonExpr],
    power: usize,
) -> Option<Degeneracy> {
    if row.iter().all(|cell| cell.limit().is_zero()) {
        let auxiliary = above.to_vec();
        let derivative = auxiliary_derivative(&auxiliary, power + 1);
        debug!(
            power,
            auxiliary = %DisplayRow(&auxiliary),
            derivative = %DisplayRow(&derivative),
            "row vanished, substituting auxiliary polynomial derivative"
        );
        for (cell, value) in row.iter_mut().zip(derivative) {
            *cell = value;
        }
        return Some(Degeneracy::ZeroRow { power, auxiliary });
    }

    let first = row.first_mut()?;
    if first.limit().is_zero() {
        debug!(power, "zero pivot, substituting ε");
        *first = EpsilonExpr::marker();
        return Some(Degeneracy::ZeroPivot { power });
    }
    None
}

/// Derivative of `c[0]·x^top + c[1]·x^(top-2) + ...`, read back in the same
/// column layout one power lower
pub fn auxiliary_derivative(coefficients: &[EpsilonExpr], top: usize) -> Vec<EpsilonExpr> {
    coefficients
        .iter()
        .enumerate()
        .map(|(column, coeff)| match top.checked_sub(2 * column) {
            Some(exponent) if exponent > 0 => {
                coeff.scale(&BigRational::from_integer(BigInt::from(exponent)))
            }
            _ => EpsilonExpr::zero(),
        })
        .collect()
}

struct DisplayRow<'a>(&'a [EpsilonExpr]);

impl std::fmt::Display for DisplayRow<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, cell) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{cell}")?;
        }
        write!(f, "]")
    }
}
