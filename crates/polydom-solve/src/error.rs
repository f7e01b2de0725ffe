//! Errors raised by the root finders.

use polydom_poly::PolyError;
use thiserror::Error;

/// Errors that can occur during root finding.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SolveError {
    /// Evaluation failed, typically because an iterate left the domain.
    #[error(transparent)]
    Poly(#[from] PolyError),

    /// The derivative vanished exactly at a Newton iterate.
    #[error("derivative is zero at x = {x} (iteration {iteration})")]
    DivisionByZero {
        /// Zero-based iteration at which the step was attempted.
        iteration: usize,
        /// Real part of the offending iterate.
        x: f64,
    },

    /// Two Durand-Kerner estimates coincided, making the denominator zero.
    #[error("singular iterate: root estimate {index} collides with another (iteration {iteration})")]
    SingularIterate {
        /// Index of the estimate whose update could not be computed.
        index: usize,
        /// Zero-based iteration of the sweep.
        iteration: usize,
    },

    /// Monic normalization needs a non-zero leading coefficient.
    #[error("leading coefficient is zero")]
    ZeroLeadingCoefficient,
}
