//! Newton-Raphson iteration.

use polydom_poly::Polynomial;
use polydom_rings::Scalar;
use tracing::{debug, trace};

use crate::error::SolveError;
use crate::options::NewtonOptions;

/// Runs `options.iterations` Newton steps `x <- x - P(x) / P'(x)` from `x0`.
///
/// There is no tolerance test: the final iterate is returned whether or not
/// it has converged. Works for real and complex scalars alike.
///
/// # Errors
///
/// - `SolveError::Poly` if an iterate falls outside the domain
/// - `SolveError::DivisionByZero` if `P'` is exactly zero at an iterate
pub fn newton<S: Scalar>(p: &Polynomial<S>, x0: S, options: &NewtonOptions) -> Result<S, SolveError> {
    let dp = p.derivative();
    let mut x = x0;

    debug!(degree = p.degree(), iterations = options.iterations, x0 = %x0, "newton start");

    for iteration in 0..options.iterations {
        let fx = p.evaluate(x)?;
        let dfx = dp.evaluate(x)?;
        if dfx.is_exactly_zero() {
            return Err(SolveError::DivisionByZero {
                iteration,
                x: x.real_part(),
            });
        }

        x = x - fx / dfx;
        trace!(iteration, x = %x, "newton step");
    }

    debug!(root = %x, "newton done");
    Ok(x)
}
