//! A real-or-complex numeric operand.

use std::fmt;

use num_complex::Complex64;

/// A numeric value that is either real or complex.
///
/// Used where an operand's kind is only known at run time, such as a
/// scaling factor read from user input. The kind is resolved once, when
/// the value is built, rather than on every arithmetic step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    /// A real number.
    Real(f64),
    /// A complex number.
    Complex(Complex64),
}

impl Number {
    /// Returns the value as a complex number.
    #[must_use]
    pub fn to_complex(self) -> Complex64 {
        match self {
            Number::Real(x) => Complex64::new(x, 0.0),
            Number::Complex(z) => z,
        }
    }
}

impl From<f64> for Number {
    fn from(x: f64) -> Self {
        Number::Real(x)
    }
}

impl From<Complex64> for Number {
    fn from(z: Complex64) -> Self {
        Number::Complex(z)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Real(x) => write!(f, "{x}"),
            Number::Complex(z) => write!(f, "{z}"),
        }
    }
}
