//! Polynomial composition `P(Q(x))`.
//!
//! The exact domain of `P ∘ Q` is `{x ∈ dom Q : Q(x) ∈ dom P}`, which is in
//! general a union of intervals. [`Polynomial::compose`] keeps `Q`'s domain
//! on the expanded result; [`Polynomial::compose_checked`] returns a
//! [`Composition`] that also tests the inner value against `P`'s domain at
//! every evaluation.

use polydom_rings::Scalar;

use crate::error::PolyError;
use crate::polynomial::Polynomial;

impl<S: Scalar> Polynomial<S> {
    /// Computes `self(inner(x))` as `Σ_k self.coeff(k) * inner^k`.
    ///
    /// Powers of `inner` are accumulated one multiplication at a time. The
    /// result carries `inner`'s domain and `self`'s variable and label.
    #[must_use]
    pub fn compose(&self, inner: &Self) -> Self {
        let domain = inner.domain();
        let mut power: Polynomial<S> = Polynomial::one(domain);
        let mut sum: Polynomial<S> = Polynomial::constant(self.coeff(0), domain);

        for k in 1..=self.degree() {
            power = power.mul(inner);
            sum = sum.add(&power.scale(self.coeff(k)));
        }

        self.derive(sum.coeff_vec().clone(), domain)
    }

    /// Composes and keeps both operands for domain-checked evaluation.
    #[must_use]
    pub fn compose_checked(&self, inner: &Self) -> Composition<S> {
        Composition {
            expanded: self.compose(inner),
            outer: self.clone(),
            inner: inner.clone(),
        }
    }
}

/// The composition `outer(inner(x))` with deferred inner-domain checking.
#[derive(Clone, Debug, PartialEq)]
pub struct Composition<S: Scalar = f64> {
    outer: Polynomial<S>,
    inner: Polynomial<S>,
    expanded: Polynomial<S>,
}

impl<S: Scalar> Composition<S> {
    /// Evaluates at `x`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfDomain` if `x` is outside the inner domain, or if
    /// `inner(x)` is outside the outer domain.
    pub fn evaluate<X>(&self, x: X) -> Result<X, PolyError>
    where
        X: Scalar + From<S>,
    {
        let y = self.inner.evaluate(x)?;
        let re = y.real_part();
        if !self.outer.accepts(re) {
            return Err(PolyError::OutOfDomain {
                x: re,
                domain: self.outer.domain(),
            });
        }
        self.expanded.evaluate(x)
    }

    /// Returns the expanded polynomial.
    #[must_use]
    pub fn expanded(&self) -> &Polynomial<S> {
        &self.expanded
    }

    /// Returns the outer polynomial.
    #[must_use]
    pub fn outer(&self) -> &Polynomial<S> {
        &self.outer
    }

    /// Returns the inner polynomial.
    #[must_use]
    pub fn inner(&self) -> &Polynomial<S> {
        &self.inner
    }

    /// Consumes the composition and returns the expanded polynomial.
    #[must_use]
    pub fn into_expanded(self) -> Polynomial<S> {
        self.expanded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Domain;
    use approx::assert_relative_eq;

    #[test]
    fn test_compose_square_of_shift() {
        // p(y) = y^2, q(x) = x + 1 => (x + 1)^2
        let p = Polynomial::unbounded(vec![0.0, 0.0, 1.0]).unwrap();
        let q = Polynomial::unbounded(vec![1.0, 1.0]).unwrap();
        assert_eq!(p.compose(&q).coeffs(), &[1.0, 2.0, 1.0]);
    }

    #[test]
    fn test_compose_outer_longer_than_inner() {
        // p(y) = 1 + y^3, q(x) = 2x => 1 + 8x^3
        let p = Polynomial::unbounded(vec![1.0, 0.0, 0.0, 1.0]).unwrap();
        let q = Polynomial::unbounded(vec![0.0, 2.0]).unwrap();
        let r = p.compose(&q);
        assert_eq!(r.degree(), 3);
        assert_eq!(r.coeffs(), &[1.0, 0.0, 0.0, 8.0]);
    }

    #[test]
    fn test_compose_matches_nested_evaluation() {
        let p = Polynomial::unbounded(vec![4.0, -3.0, 0.0, 1.0]).unwrap();
        let q = Polynomial::unbounded(vec![-1.0, 0.5, 2.0]).unwrap();
        let r = p.compose(&q);
        for &x in &[-2.0, -0.5, 0.0, 1.25, 3.0] {
            let nested = p.evaluate(q.evaluate(x).unwrap()).unwrap();
            assert_relative_eq!(r.evaluate(x).unwrap(), nested, max_relative = 1e-10);
        }
    }

    #[test]
    fn test_compose_constant_outer() {
        let p = Polynomial::constant(5.0, Domain::unbounded());
        let q = Polynomial::unbounded(vec![1.0, 1.0]).unwrap();
        assert_eq!(p.compose(&q).coeffs(), &[5.0]);
    }

    #[test]
    fn test_compose_metadata() {
        let p = Polynomial::new(vec![0.0, 1.0], (-1.0, 1.0)).unwrap().with_label("P");
        let q = Polynomial::new(vec![0.0, 3.0], (-5.0, 5.0)).unwrap().with_label("Q");
        let r = p.compose(&q);
        assert_eq!(r.domain(), Domain::new(-5.0, 5.0));
        assert_eq!(r.label(), Some("P"));
    }

    #[test]
    fn test_checked_composition_rejects_inner_range() {
        // q maps [-5, 5] onto [-15, 15], p only accepts [-1, 1]
        let p = Polynomial::new(vec![0.0, 1.0], (-1.0, 1.0)).unwrap();
        let q = Polynomial::new(vec![0.0, 3.0], (-5.0, 5.0)).unwrap();
        let c = p.compose_checked(&q);

        assert_relative_eq!(c.evaluate(0.25).unwrap(), 0.75);
        assert_eq!(
            c.evaluate(1.0),
            Err(PolyError::OutOfDomain {
                x: 3.0,
                domain: Domain::new(-1.0, 1.0)
            })
        );
        assert!(c.evaluate(6.0).is_err());
        assert!(c.expanded().evaluate(1.0).is_ok());
    }
}
