//! # polydom
//!
//! Polynomial algebra over bounded real domains.
//!
//! polydom represents single-variable polynomials with real or complex
//! coefficients, each tied to a closed interval of the real line, and
//! provides:
//!
//! - **Arithmetic**: addition, subtraction, convolution, scaling, powers
//! - **Calculus**: formal derivative, indefinite integral with a constant
//! - **Composition**: `P(Q(x))` with optional inner-domain checking
//! - **Root finding**: Newton-Raphson and Durand-Kerner iteration
//! - **Chebyshev families**: memoized `Tₙ` and `Uₙ`
//!
//! ## Quick Start
//!
//! ```rust
//! use polydom::prelude::*;
//!
//! let p = Polynomial::new(vec![-4.0, 0.0, 1.0], (-10.0, 10.0))?;
//! let q = Polynomial::new(vec![1.0, 1.0], (0.0, 20.0))?;
//!
//! let product = &p * &q;
//! assert_eq!(product.degree(), 3);
//! assert_eq!(product.domain().bounds(), (0.0, 10.0));
//!
//! let root = p.newton_solve(3.0, 5)?;
//! assert!((root - 2.0).abs() < 1e-6);
//!
//! let t2 = chebyshev_first_kind(2);
//! assert_eq!(t2.coeffs(), &[-1.0, 0.0, 2.0]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use polydom_poly as poly;
pub use polydom_rings as rings;
pub use polydom_solve as solve;
pub use polydom_special_func as special_func;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use polydom_poly::{CoeffVec, Composition, Domain, Multiplier, PolyError, Polynomial};
    pub use polydom_rings::{Complex64, Number, Scalar};
    pub use polydom_solve::{
        durand_kerner, durand_kerner_complex, newton, DurandKernerOptions, NewtonOptions,
        RootFinding, SolveError,
    };
    pub use polydom_special_func::{
        chebyshev_first_kind, chebyshev_second_kind, OrthogonalFamily,
    };
}
