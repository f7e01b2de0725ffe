//! Orthogonal polynomial families for polydom.
//!
//! This crate provides memoized generators for families defined by a
//! three-term recurrence:
//!
//! - **Chebyshev, first kind**: `T₀ = 1`, `T₁ = x`, `Tₙ = 2x·Tₙ₋₁ - Tₙ₋₂`
//! - **Chebyshev, second kind**: `U₀ = 1`, `U₁ = 2x`, `Uₙ = 2x·Uₙ₋₁ - Uₙ₋₂`
//!
//! Both live on `[-1, 1]`. Each family owns its cache; entries are built
//! once and shared as `Arc<Polynomial>` for the lifetime of the process.

pub mod chebyshev;
pub mod family;

pub use chebyshev::{chebyshev_first_kind, chebyshev_second_kind, first_kind, second_kind};
pub use family::OrthogonalFamily;
