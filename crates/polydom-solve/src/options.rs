//! Solver configuration.

use num_complex::Complex64;

/// Default number of Newton-Raphson steps.
pub const DEFAULT_NEWTON_ITERATIONS: usize = 5;

/// Default number of Durand-Kerner sweeps.
pub const DEFAULT_DURAND_KERNER_ITERATIONS: usize = 20;

/// Configuration for Newton-Raphson iteration.
#[derive(Clone, Debug, PartialEq)]
pub struct NewtonOptions {
    /// Number of steps to take. No early exit.
    pub iterations: usize,
}

impl NewtonOptions {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of steps.
    #[must_use]
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }
}

impl Default for NewtonOptions {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_NEWTON_ITERATIONS,
        }
    }
}

/// Configuration for Durand-Kerner simultaneous iteration.
#[derive(Clone, Debug, PartialEq)]
pub struct DurandKernerOptions {
    /// Number of sweeps. No early exit.
    pub iterations: usize,
    /// Seed base `b`; the initial estimates are `b^0, b^1, ..., b^(n-1)`.
    ///
    /// Must be non-real and not a root of unity of order below the degree,
    /// otherwise two seeds coincide.
    pub seed: Complex64,
    /// Divide through by the leading coefficient before iterating.
    pub monic: bool,
}

impl DurandKernerOptions {
    /// The default seed base `0.4 + 0.9i` (|b| ≈ 0.985, arg b ≈ 66°).
    pub const DEFAULT_SEED: Complex64 = Complex64::new(0.4, 0.9);

    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of sweeps.
    #[must_use]
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Sets the seed base.
    #[must_use]
    pub fn seed(mut self, seed: Complex64) -> Self {
        self.seed = seed;
        self
    }

    /// Enables or disables monic normalization.
    #[must_use]
    pub fn monic(mut self, monic: bool) -> Self {
        self.monic = monic;
        self
    }
}

impl Default for DurandKernerOptions {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_DURAND_KERNER_ITERATIONS,
            seed: Self::DEFAULT_SEED,
            monic: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(NewtonOptions::default().iterations, 5);
        let dk = DurandKernerOptions::default();
        assert_eq!(dk.iterations, 20);
        assert_eq!(dk.seed, Complex64::new(0.4, 0.9));
        assert!(!dk.monic);
    }

    #[test]
    fn test_builders() {
        let dk = DurandKernerOptions::new().iterations(50).monic(true);
        assert_eq!(dk.iterations, 50);
        assert!(dk.monic);
        assert_eq!(NewtonOptions::new().iterations(1).iterations, 1);
    }
}
