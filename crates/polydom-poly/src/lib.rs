//! # polydom-poly
//!
//! Single-variable polynomials over a bounded real domain.
//!
//! This crate provides:
//! - A coefficient vector with a total `coeff(n)` accessor
//! - Closed real domains and their intersection
//! - Arithmetic: addition, negation, subtraction, convolution, scaling, powers
//! - Calculus: formal derivative and indefinite integral
//! - Composition `P(Q(x))`
//!
//! ## Domains
//!
//! Every polynomial carries one closed interval. Binary operations keep the
//! intersection of their operands' domains, which may be empty. Emptiness is
//! never rejected at construction; it surfaces as an `OutOfDomain` error the
//! first time the result is evaluated.
//!
//! ## Representation
//!
//! Coefficients are stored in ascending degree order and are *not*
//! normalized: leading zeros produced by cancellation are kept, so the degree
//! of a sum is always the larger operand degree. Use
//! [`Polynomial::trimmed`] to drop them explicitly.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod arithmetic;
pub mod calculus;
pub mod coeffs;
pub mod compose;
pub mod domain;
pub mod error;
pub mod polynomial;

#[cfg(test)]
mod proptests;

pub use arithmetic::Multiplier;
pub use coeffs::CoeffVec;
pub use compose::Composition;
pub use domain::Domain;
pub use error::PolyError;
pub use polynomial::{Polynomial, MAX_SAMPLES};
