//! # polydom-solve
//!
//! Iterative root finding for polydom polynomials.
//!
//! This crate provides:
//! - Newton-Raphson iteration for a single root from an initial guess
//! - Durand-Kerner (Weierstrass) simultaneous iteration for all roots
//!
//! Both algorithms run a fixed number of iterations with no tolerance test
//! and return whatever the last iterate is. Callers that need a convergence
//! guarantee must check residuals themselves.
//!
//! ## Feature flags
//!
//! - `parallel`: compute the per-root Durand-Kerner updates of one sweep on
//!   the rayon pool. Results are identical to the sequential sweep because
//!   every update reads the same snapshot.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod durand_kerner;
pub mod error;
pub mod newton;
pub mod options;

pub use durand_kerner::{durand_kerner, durand_kerner_complex};
pub use error::SolveError;
pub use newton::newton;
pub use options::{
    DurandKernerOptions, NewtonOptions, DEFAULT_DURAND_KERNER_ITERATIONS,
    DEFAULT_NEWTON_ITERATIONS,
};

use polydom_poly::Polynomial;
use polydom_rings::Scalar;

/// Root finding as methods on [`Polynomial`].
pub trait RootFinding<S: Scalar> {
    /// Newton-Raphson from `x0` with the given number of iterations.
    ///
    /// # Errors
    ///
    /// See [`newton`].
    fn newton_solve(&self, x0: S, iterations: usize) -> Result<S, SolveError>;

    /// Durand-Kerner with the given number of iterations, real parts only.
    ///
    /// # Errors
    ///
    /// See [`durand_kerner`].
    fn durand_kerner_solve(&self, iterations: usize) -> Result<Vec<f64>, SolveError>;
}

impl<S> RootFinding<S> for Polynomial<S>
where
    S: Scalar,
    num_complex::Complex64: From<S>,
{
    fn newton_solve(&self, x0: S, iterations: usize) -> Result<S, SolveError> {
        newton(self, x0, &NewtonOptions::new().iterations(iterations))
    }

    fn durand_kerner_solve(&self, iterations: usize) -> Result<Vec<f64>, SolveError> {
        durand_kerner(self, &DurandKernerOptions::new().iterations(iterations))
    }
}
