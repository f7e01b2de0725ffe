//! Coefficient vectors with a total accessor.

use polydom_rings::Scalar;

use crate::error::PolyError;

/// Coefficients in ascending degree order.
///
/// Always holds at least one entry, so `degree()` is well defined. Reads past
/// the stored range through [`CoeffVec::coeff`] return zero; every
/// arithmetic routine in this crate relies on that and never indexes the raw
/// storage with an operand-dependent bound.
#[derive(Clone, Debug, PartialEq)]
pub struct CoeffVec<S: Scalar> {
    coeffs: Vec<S>,
}

impl<S: Scalar> CoeffVec<S> {
    /// Wraps a coefficient sequence. Fails on an empty sequence.
    pub fn new(coeffs: Vec<S>) -> Result<Self, PolyError> {
        if coeffs.is_empty() {
            return Err(PolyError::EmptyCoefficients);
        }
        Ok(Self { coeffs })
    }

    /// The zero vector `[0]`.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            coeffs: vec![S::zero()],
        }
    }

    /// A single constant term.
    #[must_use]
    pub fn constant(c: S) -> Self {
        Self { coeffs: vec![c] }
    }

    /// Builds `[f(0), f(1), ..., f(degree)]`.
    #[must_use]
    pub fn from_fn(degree: usize, f: impl FnMut(usize) -> S) -> Self {
        Self {
            coeffs: (0..=degree).map(f).collect(),
        }
    }

    /// Returns the degree (`len - 1`).
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Returns the coefficient of `x^n`, or zero beyond the stored range.
    #[must_use]
    pub fn coeff(&self, n: usize) -> S {
        self.coeffs.get(n).copied().unwrap_or_else(S::zero)
    }

    /// Returns the leading stored coefficient (possibly zero).
    #[must_use]
    pub fn leading(&self) -> S {
        self.coeffs[self.coeffs.len() - 1]
    }

    /// Returns all stored coefficients.
    #[must_use]
    pub fn as_slice(&self) -> &[S] {
        &self.coeffs
    }

    /// Applies `f` to every coefficient.
    #[must_use]
    pub fn map<T: Scalar>(&self, f: impl FnMut(S) -> T) -> CoeffVec<T> {
        CoeffVec {
            coeffs: self.coeffs.iter().copied().map(f).collect(),
        }
    }

    /// Drops trailing exact zeros, keeping at least one coefficient.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        let mut coeffs = self.coeffs.clone();
        while coeffs.len() > 1 && coeffs.last().is_some_and(Scalar::is_exactly_zero) {
            coeffs.pop();
        }
        Self { coeffs }
    }

    /// Consumes the vector and returns its storage.
    #[must_use]
    pub fn into_vec(self) -> Vec<S> {
        self.coeffs
    }
}
