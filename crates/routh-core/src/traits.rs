//! Traits at the seams between the engine and swappable components

use crate::error::Result;
use crate::polynomial::Polynomial;
use num_complex::Complex64;

/// Something that can compute all complex roots of a polynomial
///
/// Used by the root cross-check only; the stability verdict never depends
/// on it.
pub trait RootLocator {
    /// All roots of `polynomial`, counted with multiplicity
    fn roots(&self, polynomial: &Polynomial) -> Result<Vec<Complex64>>;

    /// Get the name of the root-finding method
    fn method_name(&self) -> &str;
}

impl<L: RootLocator + ?Sized> RootLocator for &L {
    fn roots(&self, polynomial: &Polynomial) -> Result<Vec<Complex64>> {
        (**self).roots(polynomial)
    }

    fn method_name(&self) -> &str {
        (**self).method_name()
    }
}
