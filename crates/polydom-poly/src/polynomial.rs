//! The `Polynomial` type: coefficients, domain, and display metadata.

use std::fmt;

use num_complex::Complex64;
use polydom_rings::{Number, Scalar};

use crate::coeffs::CoeffVec;
use crate::domain::Domain;
use crate::error::PolyError;

/// Upper bound on the number of points [`Polynomial::sample`] will produce.
pub const MAX_SAMPLES: usize = 1 << 24;

/// A single-variable polynomial over a closed real domain.
///
/// The variable symbol and label are display metadata only. They are carried
/// through every operation unchanged (binary operations keep the left
/// operand's) and never influence a computed value.
///
/// Values are immutable: every operation returns a new polynomial.
#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial<S: Scalar = f64> {
    coeffs: CoeffVec<S>,
    domain: Domain,
    variable: String,
    label: Option<String>,
}

impl<S: Scalar> Polynomial<S> {
    /// Creates a polynomial from ascending coefficients.
    ///
    /// Fails if `coeffs` is empty. The domain is not validated.
    pub fn new(coeffs: Vec<S>, domain: impl Into<Domain>) -> Result<Self, PolyError> {
        Ok(Self::from_coeffs(CoeffVec::new(coeffs)?, domain.into()))
    }

    /// Creates a polynomial over the whole real line.
    pub fn unbounded(coeffs: Vec<S>) -> Result<Self, PolyError> {
        Self::new(coeffs, Domain::unbounded())
    }

    /// Wraps an existing coefficient vector.
    #[must_use]
    pub fn from_coeffs(coeffs: CoeffVec<S>, domain: Domain) -> Self {
        Self {
            coeffs,
            domain,
            variable: "x".to_string(),
            label: None,
        }
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: S, domain: impl Into<Domain>) -> Self {
        Self::from_coeffs(CoeffVec::constant(c), domain.into())
    }

    /// Creates the zero polynomial `[0]`.
    #[must_use]
    pub fn zero(domain: impl Into<Domain>) -> Self {
        Self::from_coeffs(CoeffVec::zero(), domain.into())
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one(domain: impl Into<Domain>) -> Self {
        Self::constant(S::one(), domain)
    }

    /// Creates the monomial `c * x^n`.
    #[must_use]
    pub fn monomial(c: S, n: usize, domain: impl Into<Domain>) -> Self {
        let coeffs = CoeffVec::from_fn(n, |k| if k == n { c } else { S::zero() });
        Self::from_coeffs(coeffs, domain.into())
    }

    /// Replaces the variable symbol.
    #[must_use]
    pub fn with_variable(mut self, variable: impl Into<String>) -> Self {
        self.variable = variable.into();
        self
    }

    /// Replaces the label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Clears the label.
    #[must_use]
    pub fn without_label(mut self) -> Self {
        self.label = None;
        self
    }

    /// Replaces the domain.
    #[must_use]
    pub fn with_domain(mut self, domain: impl Into<Domain>) -> Self {
        self.domain = domain.into();
        self
    }

    /// Builds a sibling polynomial that keeps this one's variable and label.
    pub(crate) fn derive<T: Scalar>(&self, coeffs: CoeffVec<T>, domain: Domain) -> Polynomial<T> {
        Polynomial {
            coeffs,
            domain,
            variable: self.variable.clone(),
            label: self.label.clone(),
        }
    }

    pub(crate) fn set_label(&mut self, label: Option<String>) {
        self.label = label;
    }

    /// Returns the degree (number of stored coefficients minus one).
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.degree()
    }

    /// Returns the coefficient of `x^n`; zero beyond the degree.
    #[must_use]
    pub fn coeff(&self, n: usize) -> S {
        self.coeffs.coeff(n)
    }

    /// Returns all stored coefficients.
    #[must_use]
    pub fn coeffs(&self) -> &[S] {
        self.coeffs.as_slice()
    }

    /// Returns the coefficient vector.
    #[must_use]
    pub fn coeff_vec(&self) -> &CoeffVec<S> {
        &self.coeffs
    }

    /// Returns the leading stored coefficient (possibly zero).
    #[must_use]
    pub fn leading_coeff(&self) -> S {
        self.coeffs.leading()
    }

    /// Returns the domain.
    #[must_use]
    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// Returns the variable symbol.
    #[must_use]
    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// Returns the label, if any.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Returns true if every stored coefficient is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs().iter().all(Scalar::is_exactly_zero)
    }

    /// Returns a copy with trailing zero coefficients removed.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        self.derive(self.coeffs.trimmed(), self.domain)
    }

    /// Evaluates `Σ c_k x^k` at `x` using Horner's method.
    ///
    /// `x` may be of any scalar type the coefficients lift into, so a real
    /// polynomial evaluates at both real and complex points. Complex points
    /// are tested against the domain by their real part.
    ///
    /// # Errors
    ///
    /// Returns `PolyError::OutOfDomain` if `x` lies outside the closed domain.
    pub fn evaluate<X>(&self, x: X) -> Result<X, PolyError>
    where
        X: Scalar + From<S>,
    {
        let re = x.real_part();
        if !self.domain.contains(re) {
            return Err(PolyError::OutOfDomain {
                x: re,
                domain: self.domain,
            });
        }

        let mut result = X::zero();
        for &c in self.coeffs().iter().rev() {
            result = result * x + X::from(c);
        }
        Ok(result)
    }

    /// Returns true if `x` lies in the domain.
    #[must_use]
    pub fn accepts(&self, x: f64) -> bool {
        self.domain.contains(x)
    }
}

impl Polynomial<f64> {
    /// Evaluates at a real or complex point chosen at run time.
    ///
    /// # Errors
    ///
    /// Returns `PolyError::OutOfDomain` if the (real part of the) point lies
    /// outside the domain.
    pub fn evaluate_number(&self, x: Number) -> Result<Number, PolyError> {
        match x {
            Number::Real(r) => self.evaluate(r).map(Number::Real),
            Number::Complex(z) => self.evaluate(z).map(Number::Complex),
        }
    }

    /// Lifts every coefficient into the complex plane.
    #[must_use]
    pub fn to_complex(&self) -> Polynomial<Complex64> {
        self.derive(self.coeffs.map(Complex64::from), self.domain)
    }

    /// Samples `(x, P(x))` across the domain.
    ///
    /// Points are `lower + k * step` for every `k` with
    /// `k * step < upper - lower`, so the final point stays strictly inside
    /// the domain unless the domain is a single point.
    ///
    /// # Errors
    ///
    /// - `InvalidStep` if `step` is not positive and finite, is below the
    ///   float spacing at the domain bounds, or would produce more than
    ///   [`MAX_SAMPLES`] points
    /// - `UnboundedDomain` if either bound is infinite
    /// - `OutOfDomain` if the domain is empty
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn sample(&self, step: f64) -> Result<Vec<(f64, f64)>, PolyError> {
        if !(step.is_finite() && step > 0.0) {
            return Err(PolyError::InvalidStep(step));
        }
        if !self.domain.is_bounded() {
            return Err(PolyError::UnboundedDomain(self.domain));
        }

        let (start, stop) = self.domain.bounds();
        let widest = start.abs().max(stop.abs());
        if widest + step == widest {
            return Err(PolyError::InvalidStep(step));
        }

        let span = stop - start;
        let count = if span > 0.0 { (span / step).ceil() } else { 1.0 };
        if !(count.is_finite() && count <= MAX_SAMPLES as f64) {
            return Err(PolyError::InvalidStep(step));
        }

        let count = count as usize;
        (0..count)
            .map(|k| {
                let x = start + k as f64 * step;
                Ok((x, self.evaluate(x)?))
            })
            .collect()
    }
}

impl<S: Scalar> fmt::Display for Polynomial<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let var = &self.variable;
        let mut terms = Vec::new();
        for (i, c) in self.coeffs().iter().enumerate() {
            if c.is_exactly_zero() {
                continue;
            }

            let term = match i {
                0 => format!("{c}"),
                1 => format!("{c}{var}"),
                _ => format!("{c}{var}^{i}"),
            };
            terms.push(term);
        }

        write!(f, "{}", terms.join(" + "))
    }
}
