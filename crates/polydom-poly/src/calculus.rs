//! Formal derivative and indefinite integral.

use polydom_rings::Scalar;

use crate::coeffs::CoeffVec;
use crate::error::PolyError;
use crate::polynomial::Polynomial;

impl<S: Scalar> Polynomial<S> {
    /// Computes the formal derivative.
    ///
    /// Coefficient `k` is `(k + 1) * c_{k+1}`. The derivative of a constant
    /// is the zero polynomial `[0]`, so the degree never goes below zero.
    ///
    /// Because of that floor, `p.derivative().integral(p.coeff(0))` gives
    /// back `p` only up to trailing zeros when `p` is constant: `[c]`
    /// returns as `[c, 0]`.
    #[must_use]
    pub fn derivative(&self) -> Self {
        let coeffs = if self.degree() == 0 {
            CoeffVec::zero()
        } else {
            CoeffVec::from_fn(self.degree() - 1, |k| S::from_index(k + 1) * self.coeff(k + 1))
        };

        let mut result = self.derive(coeffs, self.domain());
        let var = self.variable();
        result.set_label(self.label().map(|l| format!("\\frac{{d}}{{d{var}}}{l}")));
        result
    }

    /// Computes the indefinite integral with constant term `c`.
    ///
    /// Coefficient `k >= 1` is `c_{k-1} / k`, always a true (non-truncating)
    /// division. The result has one more degree than `self`, including for
    /// the zero polynomial `[0]`, which integrates to `[c, 0]`.
    #[must_use]
    pub fn integral(&self, c: S) -> Self {
        let coeffs = CoeffVec::from_fn(self.degree() + 1, |k| {
            if k == 0 {
                c
            } else {
                self.coeff(k - 1) / S::from_index(k)
            }
        });

        let mut result = self.derive(coeffs, self.domain());
        let var = self.variable();
        result.set_label(self.label().map(|l| format!("\\int{l}d{var}")));
        result
    }

    /// Evaluates the definite integral over `[a, b]`.
    ///
    /// # Errors
    ///
    /// Fails if either bound lies outside the domain.
    pub fn definite_integral(&self, a: f64, b: f64) -> Result<S, PolyError>
    where
        S: From<f64>,
    {
        let antiderivative = self.integral(S::zero());
        Ok(antiderivative.evaluate(S::from(b))? - antiderivative.evaluate(S::from(a))?)
    }
}
