//! Scalar traits.
//!
//! `Scalar` is the coefficient and evaluation-point type of a polynomial.
//! It is deliberately small: a field with copy semantics plus the few
//! conversions the polynomial engine needs.

use std::fmt::{Debug, Display};
use std::ops::Neg;

use num_complex::Complex64;
use num_traits::Num;

/// A numeric value a polynomial can be built from or evaluated at.
///
/// # Laws
///
/// - `from_real(x).real_part() == x` for every finite `x`
/// - `is_exactly_zero` is an exact comparison, never a tolerance test
pub trait Scalar:
    Copy + Debug + Display + PartialEq + Num + Neg<Output = Self> + Send + Sync + 'static
{
    /// Lifts a real number into this scalar type.
    fn from_real(x: f64) -> Self;

    /// Projects onto the real line.
    fn real_part(&self) -> f64;

    /// Converts a power index into a scalar, without integer truncation.
    #[allow(clippy::cast_precision_loss)]
    fn from_index(k: usize) -> Self {
        Self::from_real(k as f64)
    }

    /// Returns true if this value is exactly zero.
    fn is_exactly_zero(&self) -> bool {
        self.is_zero()
    }
}

impl Scalar for f64 {
    fn from_real(x: f64) -> Self {
        x
    }

    fn real_part(&self) -> f64 {
        *self
    }
}

impl Scalar for Complex64 {
    fn from_real(x: f64) -> Self {
        Complex64::new(x, 0.0)
    }

    fn real_part(&self) -> f64 {
        self.re
    }
}
