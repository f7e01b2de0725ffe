//! # polydom-rings
//!
//! Numeric scalars for polydom polynomials.
//!
//! This crate provides:
//! - The `Scalar` trait implemented for `f64` and `Complex64`
//! - The `Number` sum type for an operand that is either real or complex
//!
//! Real coefficients can always be lifted into the complex plane
//! (`Complex64: From<f64>`), which is what lets a real polynomial be
//! evaluated at complex points during simultaneous root iteration.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod number;
pub mod traits;

pub use num_complex::Complex64;
pub use number::Number;
pub use traits::Scalar;
