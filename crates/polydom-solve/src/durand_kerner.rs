//! Durand-Kerner simultaneous root iteration.
//!
//! Every sweep replaces all estimates at once:
//!
//! ```text
//! r_i <- r_i - P(r_i) / Π_{j≠i} (r_i - r_j)
//! ```
//!
//! with every `r_j` taken from the previous sweep. Updating in place would
//! change the iteration (it becomes a Gauss-Seidel variant) and its
//! convergence rate.

use num_complex::Complex64;
use polydom_poly::Polynomial;
use polydom_rings::Scalar;
use tracing::{debug, trace};

use crate::error::SolveError;
use crate::options::DurandKernerOptions;

/// Approximates all roots and returns their real parts.
///
/// Imaginary parts are discarded, so a genuinely complex root pair shows up
/// as two copies of its real part. Use [`durand_kerner_complex`] to keep
/// them.
///
/// # Errors
///
/// See [`durand_kerner_complex`].
pub fn durand_kerner<S>(p: &Polynomial<S>, options: &DurandKernerOptions) -> Result<Vec<f64>, SolveError>
where
    S: Scalar,
    Complex64: From<S>,
{
    let roots = durand_kerner_complex(p, options)?;
    Ok(roots.iter().map(|z| z.re).collect())
}

/// Approximates all roots as complex numbers.
///
/// Returns `degree` estimates (none for a constant). Seeds are successive
/// powers of `options.seed`.
///
/// # Errors
///
/// - `SolveError::Poly` if an estimate's real part leaves the domain
/// - `SolveError::SingularIterate` if two estimates coincide exactly
/// - `SolveError::ZeroLeadingCoefficient` if `options.monic` is set and the
///   leading coefficient is zero
pub fn durand_kerner_complex<S>(
    p: &Polynomial<S>,
    options: &DurandKernerOptions,
) -> Result<Vec<Complex64>, SolveError>
where
    S: Scalar,
    Complex64: From<S>,
{
    let mut work = Polynomial::from_coeffs(p.coeff_vec().map(Complex64::from), p.domain());
    if options.monic {
        let lead = work.leading_coeff();
        if lead.is_exactly_zero() {
            return Err(SolveError::ZeroLeadingCoefficient);
        }
        work = work.scale(lead.inv());
    }

    let n = work.degree();
    debug!(degree = n, iterations = options.iterations, "durand-kerner start");

    let seed = options.seed;
    let mut roots: Vec<Complex64> = std::iter::successors(Some(Complex64::new(1.0, 0.0)), |z| Some(z * seed))
        .take(n)
        .collect();

    for iteration in 0..options.iterations {
        roots = sweep(&work, &roots, iteration)?;
        trace!(iteration, ?roots, "durand-kerner sweep");
    }

    debug!(?roots, "durand-kerner done");
    Ok(roots)
}

/// Computes the update of estimate `index` from `snapshot`.
fn update(
    p: &Polynomial<Complex64>,
    snapshot: &[Complex64],
    index: usize,
    iteration: usize,
) -> Result<Complex64, SolveError> {
    let r = snapshot[index];
    let denominator: Complex64 = snapshot
        .iter()
        .enumerate()
        .filter(|&(j, _)| j != index)
        .map(|(_, &s)| r - s)
        .product();

    if denominator.is_exactly_zero() {
        return Err(SolveError::SingularIterate { index, iteration });
    }

    Ok(r - p.evaluate(r)? / denominator)
}

#[cfg(not(feature = "parallel"))]
fn sweep(
    p: &Polynomial<Complex64>,
    snapshot: &[Complex64],
    iteration: usize,
) -> Result<Vec<Complex64>, SolveError> {
    (0..snapshot.len())
        .map(|i| update(p, snapshot, i, iteration))
        .collect()
}

#[cfg(feature = "parallel")]
fn sweep(
    p: &Polynomial<Complex64>,
    snapshot: &[Complex64],
    iteration: usize,
) -> Result<Vec<Complex64>, SolveError> {
    use rayon::prelude::*;

    (0..snapshot.len())
        .into_par_iter()
        .map(|i| update(p, snapshot, i, iteration))
        .collect()
}
