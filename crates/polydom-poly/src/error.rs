//! Errors raised by polynomial construction and evaluation.

use thiserror::Error;

use crate::domain::Domain;

/// Errors that can occur while building or evaluating a polynomial.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum PolyError {
    /// The evaluation point lies outside the closed domain.
    ///
    /// For complex points `x` is the real part that was tested.
    #[error("input {x} not in domain {domain}")]
    OutOfDomain {
        /// The rejected point.
        x: f64,
        /// The domain it was tested against.
        domain: Domain,
    },

    /// A polynomial needs at least one coefficient.
    #[error("coefficient sequence is empty")]
    EmptyCoefficients,

    /// Powers are only defined for non-negative exponents.
    #[error("negative exponent {0}")]
    NegativeExponent(i64),

    /// The exponent does not fit the `u32` range accepted by `pow`.
    #[error("exponent {0} too large")]
    ExponentTooLarge(i64),

    /// Sampling step must be positive, finite, resolvable at the domain
    /// bounds, and coarse enough to stay under the sample cap.
    #[error("invalid sampling step {0}")]
    InvalidStep(f64),

    /// Sampling needs finite domain bounds.
    #[error("cannot sample unbounded domain {0}")]
    UnboundedDomain(Domain),
}
