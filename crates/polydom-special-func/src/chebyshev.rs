//! Chebyshev polynomials of the first and second kind.
//!
//! # Key Properties
//!
//! - `Tₙ(cos θ) = cos(nθ)`
//! - `Uₙ(cos θ) = sin((n+1)θ) / sin θ`
//! - `deg Tₙ = deg Uₙ = n`, leading coefficient `2ⁿ⁻¹` and `2ⁿ` respectively
//!
//! Each kind has one process-wide family; the two caches are independent.

use std::sync::{Arc, LazyLock};

use polydom_poly::{Domain, Polynomial};

use crate::family::OrthogonalFamily;

static FIRST_KIND: LazyLock<OrthogonalFamily> = LazyLock::new(|| {
    let d = Domain::symmetric_unit();
    OrthogonalFamily::new(
        'T',
        Polynomial::constant(1.0, d),
        Polynomial::monomial(1.0, 1, d),
        Polynomial::monomial(2.0, 1, d),
    )
});

static SECOND_KIND: LazyLock<OrthogonalFamily> = LazyLock::new(|| {
    let d = Domain::symmetric_unit();
    OrthogonalFamily::new(
        'U',
        Polynomial::constant(1.0, d),
        Polynomial::monomial(2.0, 1, d),
        Polynomial::monomial(2.0, 1, d),
    )
});

/// The process-wide first-kind family.
#[must_use]
pub fn first_kind() -> &'static OrthogonalFamily {
    &FIRST_KIND
}

/// The process-wide second-kind family.
#[must_use]
pub fn second_kind() -> &'static OrthogonalFamily {
    &SECOND_KIND
}

/// Returns `Tₙ` on `[-1, 1]`.
#[must_use]
pub fn chebyshev_first_kind(n: usize) -> Arc<Polynomial> {
    FIRST_KIND.get(n)
}

/// Returns `Uₙ` on `[-1, 1]`.
#[must_use]
pub fn chebyshev_second_kind(n: usize) -> Arc<Polynomial> {
    SECOND_KIND.get(n)
}
