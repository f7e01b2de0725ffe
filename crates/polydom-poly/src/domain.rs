//! Closed real domains.

use std::fmt;

/// A closed interval `[a, b]` of the real line.
///
/// Construction never checks `a <= b`. An inverted interval is a valid value
/// (it is what the intersection of two disjoint domains produces) and simply
/// contains no points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Domain {
    lower: f64,
    upper: f64,
}

impl Domain {
    /// Creates the interval `[lower, upper]`.
    #[must_use]
    pub const fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// The whole real line.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self::new(f64::NEG_INFINITY, f64::INFINITY)
    }

    /// The Chebyshev interval `[-1, 1]`.
    #[must_use]
    pub const fn symmetric_unit() -> Self {
        Self::new(-1.0, 1.0)
    }

    /// Returns the lower bound.
    #[must_use]
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Returns the upper bound.
    #[must_use]
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Returns `(lower, upper)`.
    #[must_use]
    pub fn bounds(&self) -> (f64, f64) {
        (self.lower, self.upper)
    }

    /// Intersection `[max(a1, a2), min(b1, b2)]`. May be inverted.
    #[must_use]
    pub fn shared(&self, other: &Self) -> Self {
        Self::new(self.lower.max(other.lower), self.upper.min(other.upper))
    }

    /// Inclusive membership test. NaN is never contained.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        self.lower <= x && x <= self.upper
    }

    /// Returns true if the interval is inverted and contains nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !(self.lower <= self.upper)
    }

    /// Returns true if both bounds are finite.
    #[must_use]
    pub fn is_bounded(&self) -> bool {
        self.lower.is_finite() && self.upper.is_finite()
    }
}

impl Default for Domain {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl From<(f64, f64)> for Domain {
    fn from((lower, upper): (f64, f64)) -> Self {
        Self::new(lower, upper)
    }
}

impl From<[f64; 2]> for Domain {
    fn from([lower, upper]: [f64; 2]) -> Self {
        Self::new(lower, upper)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}

/// Free-function form of [`Domain::shared`].
#[must_use]
pub fn shared_domain(a: &Domain, b: &Domain) -> Domain {
    a.shared(b)
}
