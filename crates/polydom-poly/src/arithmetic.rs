//! Polynomial arithmetic.
//!
//! Every binary operation keeps the shared domain of its operands and the
//! left operand's variable and label. All coefficient reads go through the
//! total `coeff()` accessor, so operands of any relative degree are handled
//! by the same loop.

use std::ops::{Add, Mul, Neg, Sub};

use num_complex::Complex64;
use polydom_rings::{Number, Scalar};

use crate::coeffs::CoeffVec;
use crate::error::PolyError;
use crate::polynomial::Polynomial;

/// The right-hand side of [`Polynomial::multiply`].
///
/// Built through `From`, so the choice between convolution and scaling is
/// made by the compiler from the argument type.
#[derive(Clone, Copy, Debug)]
pub enum Multiplier<'a, S: Scalar> {
    /// Multiply by another polynomial.
    Polynomial(&'a Polynomial<S>),
    /// Scale every coefficient.
    Scalar(S),
}

impl<'a, S: Scalar> From<&'a Polynomial<S>> for Multiplier<'a, S> {
    fn from(p: &'a Polynomial<S>) -> Self {
        Multiplier::Polynomial(p)
    }
}

impl From<f64> for Multiplier<'_, f64> {
    fn from(c: f64) -> Self {
        Multiplier::Scalar(c)
    }
}

impl From<Complex64> for Multiplier<'_, Complex64> {
    fn from(c: Complex64) -> Self {
        Multiplier::Scalar(c)
    }
}

impl From<Number> for Multiplier<'_, Complex64> {
    fn from(c: Number) -> Self {
        Multiplier::Scalar(c.to_complex())
    }
}

impl<S: Scalar> Polynomial<S> {
    /// Adds two polynomials.
    ///
    /// The result has degree `max(deg self, deg other)` even when leading
    /// terms cancel.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let degree = self.degree().max(other.degree());
        let coeffs = CoeffVec::from_fn(degree, |k| self.coeff(k) + other.coeff(k));
        self.derive(coeffs, self.domain().shared(&other.domain()))
    }

    /// Negates every coefficient.
    #[must_use]
    pub fn neg(&self) -> Self {
        self.scale(-S::one())
    }

    /// Computes `self + (-other)`.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Multiplies two polynomials by discrete convolution.
    ///
    /// Coefficient `k` of the product is `Σ_{i=0}^{k} a_i * b_{k-i}` for
    /// `k` in `0..=deg a + deg b`.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        let degree = self.degree() + other.degree();
        let coeffs = CoeffVec::from_fn(degree, |k| {
            (0..=k).fold(S::zero(), |acc, i| acc + self.coeff(i) * other.coeff(k - i))
        });
        self.derive(coeffs, self.domain().shared(&other.domain()))
    }

    /// Multiplies every coefficient by `c`. Domain is unchanged.
    #[must_use]
    pub fn scale(&self, c: S) -> Self {
        self.derive(self.coeff_vec().map(|x| x * c), self.domain())
    }

    /// Multiplies by a polynomial or a scalar.
    #[must_use]
    pub fn multiply<'a>(&self, rhs: impl Into<Multiplier<'a, S>>) -> Self {
        match rhs.into() {
            Multiplier::Polynomial(p) => self.mul(p),
            Multiplier::Scalar(c) => self.scale(c),
        }
    }

    /// Raises the polynomial to a non-negative integer power.
    ///
    /// `P^0` is the constant 1 with `P`'s domain, variable and label; higher
    /// powers are `n - 1` successive multiplications by `P`.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        if n == 0 {
            return self.derive(CoeffVec::constant(S::one()), self.domain());
        }

        let mut result = self.clone();
        for _ in 1..n {
            result = result.mul(self);
        }
        result
    }

    /// Like [`Polynomial::pow`] but takes a signed exponent.
    ///
    /// # Errors
    ///
    /// Returns `PolyError::NegativeExponent` if `n < 0` and
    /// `PolyError::ExponentTooLarge` if `n > u32::MAX`.
    pub fn powi(&self, n: i64) -> Result<Self, PolyError> {
        if n < 0 {
            return Err(PolyError::NegativeExponent(n));
        }
        let n = u32::try_from(n).map_err(|_| PolyError::ExponentTooLarge(n))?;
        Ok(self.pow(n))
    }
}

impl Polynomial<f64> {
    /// Scales a real polynomial by a complex factor.
    #[must_use]
    pub fn scale_complex(&self, c: Complex64) -> Polynomial<Complex64> {
        self.to_complex().scale(c)
    }

    /// Scales by a real or complex factor chosen at run time.
    ///
    /// The result is complex in both cases so that callers see one type.
    #[must_use]
    pub fn scale_number(&self, c: Number) -> Polynomial<Complex64> {
        self.scale_complex(c.to_complex())
    }
}

impl<S: Scalar> Add for &Polynomial<S> {
    type Output = Polynomial<S>;

    fn add(self, rhs: Self) -> Polynomial<S> {
        Polynomial::add(self, rhs)
    }
}

impl<S: Scalar> Sub for &Polynomial<S> {
    type Output = Polynomial<S>;

    fn sub(self, rhs: Self) -> Polynomial<S> {
        Polynomial::sub(self, rhs)
    }
}

impl<S: Scalar> Neg for &Polynomial<S> {
    type Output = Polynomial<S>;

    fn neg(self) -> Polynomial<S> {
        Polynomial::neg(self)
    }
}

impl<S: Scalar> Mul for &Polynomial<S> {
    type Output = Polynomial<S>;

    fn mul(self, rhs: Self) -> Polynomial<S> {
        Polynomial::mul(self, rhs)
    }
}

impl Mul<f64> for &Polynomial<f64> {
    type Output = Polynomial<f64>;

    fn mul(self, rhs: f64) -> Polynomial<f64> {
        self.scale(rhs)
    }
}

impl Mul<&Polynomial<f64>> for f64 {
    type Output = Polynomial<f64>;

    fn mul(self, rhs: &Polynomial<f64>) -> Polynomial<f64> {
        rhs.scale(self)
    }
}

impl Mul<Complex64> for &Polynomial<Complex64> {
    type Output = Polynomial<Complex64>;

    fn mul(self, rhs: Complex64) -> Polynomial<Complex64> {
        self.scale(rhs)
    }
}

impl Mul<&Polynomial<Complex64>> for Complex64 {
    type Output = Polynomial<Complex64>;

    fn mul(self, rhs: &Polynomial<Complex64>) -> Polynomial<Complex64> {
        rhs.scale(self)
    }
}

impl Mul<Complex64> for &Polynomial<f64> {
    type Output = Polynomial<Complex64>;

    fn mul(self, rhs: Complex64) -> Polynomial<Complex64> {
        self.scale_complex(rhs)
    }
}

impl Mul<&Polynomial<f64>> for Complex64 {
    type Output = Polynomial<Complex64>;

    fn mul(self, rhs: &Polynomial<f64>) -> Polynomial<Complex64> {
        rhs.scale_complex(self)
    }
}
