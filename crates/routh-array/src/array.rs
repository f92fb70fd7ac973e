//! Routh array value types
//!
//! A [`RouthArray`] holds the symbolic cells produced by the builder; an
//! [`EvaluatedArray`] holds their limits as ε → 0⁺ and is what gets shown to
//! users. Row `r` of either array corresponds to power `degree - r`.

use routh_core::{EpsilonExpr, Limit};
use std::fmt;

/// Number of columns for a polynomial of the given degree: `ceil((degree + 1) / 2)`
pub fn column_count(degree: usize) -> usize {
    (degree + 2) / 2
}

/// A degenerate situation resolved while building the array
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Degeneracy {
    /// The first entry of the row for `power` was zero while the rest of the
    /// row was not; it was replaced by ε
    ZeroPivot { power: usize },
    /// The whole row for `power` vanished; it was replaced by the derivative
    /// of the auxiliary polynomial formed from the row above
    ZeroRow {
        power: usize,
        /// Coefficients of the auxiliary polynomial for powers
        /// `power + 1, power - 1, ...`
        auxiliary: Vec<EpsilonExpr>,
    },
}

impl Degeneracy {
    /// Power of the row that was rewritten
    pub fn power(&self) -> usize {
        match self {
            Degeneracy::ZeroPivot { power } | Degeneracy::ZeroRow { power, .. } => *power,
        }
    }
}

/// Fully built Routh array with symbolic cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouthArray {
    variable: String,
    degree: usize,
    rows: Vec<Vec<EpsilonExpr>>,
    degeneracies: Vec<Degeneracy>,
}

impl RouthArray {
    pub(crate) fn new(
        variable: String,
        degree: usize,
        rows: Vec<Vec<EpsilonExpr>>,
        degeneracies: Vec<Degeneracy>,
    ) -> Self {
        Self {
            variable,
            degree,
            rows,
            degeneracies,
        }
    }

    /// Variable of the analysed polynomial
    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// Degree of the analysed polynomial
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Number of rows, `degree + 1`
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns, `ceil((degree + 1) / 2)`
    pub fn column_count(&self) -> usize {
        column_count(self.degree)
    }

    /// Power represented by row index `row`
    pub fn power_of(&self, row: usize) -> usize {
        self.degree - row
    }

    /// Row for `power`, if `power <= degree`
    pub fn row(&self, power: usize) -> Option<&[EpsilonExpr]> {
        (power <= self.degree).then(|| self.rows[self.degree - power].as_slice())
    }

    /// Rows from the highest power down to power 0
    pub fn rows(&self) -> impl Iterator<Item = &[EpsilonExpr]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Column 0, top to bottom
    pub fn first_column(&self) -> impl Iterator<Item = &EpsilonExpr> {
        self.rows.iter().filter_map(|row| row.first())
    }

    /// Degeneracies resolved while building, top to bottom
    pub fn degeneracies(&self) -> &[Degeneracy] {
        &self.degeneracies
    }

    /// Whether some row vanished entirely and was replaced
    pub fn has_zero_row(&self) -> bool {
        self.degeneracies
            .iter()
            .any(|d| matches!(d, Degeneracy::ZeroRow { .. }))
    }

    /// Take the limit ε → 0⁺ of every cell
    pub fn evaluate(&self) -> EvaluatedArray {
        EvaluatedArray {
            variable: self.variable.clone(),
            degree: self.degree,
            rows: self
                .rows
                .iter()
                .map(|row| row.iter().map(EpsilonExpr::limit).collect())
                .collect(),
        }
    }
}

/// Routh array with every cell replaced by its limit as ε → 0⁺
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluatedArray {
    variable: String,
    degree: usize,
    rows: Vec<Vec<Limit>>,
}

impl EvaluatedArray {
    /// Degree of the analysed polynomial
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Rows from the highest power down to power 0
    pub fn rows(&self) -> &[Vec<Limit>] {
        &self.rows
    }

    /// Row for `power`, if `power <= degree`
    pub fn row(&self, power: usize) -> Option<&[Limit]> {
        (power <= self.degree).then(|| self.rows[self.degree - power].as_slice())
    }

    /// Column 0, top to bottom
    pub fn first_column(&self) -> Vec<&Limit> {
        self.rows.iter().filter_map(|row| row.first()).collect()
    }

    /// Row labels, `x^n` down to `x^0`
    pub fn labels(&self) -> Vec<String> {
        (0..=self.degree)
            .rev()
            .map(|p| format!("{}^{p}", self.variable))
            .collect()
    }
}

impl fmt::Display for EvaluatedArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels = self.labels();
        let cells: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| row.iter().map(ToString::to_string).collect())
            .collect();

        let label_width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let columns = cells.first().map_or(0, Vec::len);
        let widths: Vec<usize> = (0..columns)
            .map(|j| {
                cells
                    .iter()
                    .filter_map(|row| row.get(j))
                    .map(|c| c.chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        for (label, row) in labels.iter().zip(&cells) {
            write!(f, "{label:<label_width$} |")?;
            for (cell, width) in row.iter().zip(&widths) {
                write!(f, "  {cell:>width$}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
