//! # realpoly
//!
//! Univariate polynomials with real (`f64`) coefficients.
//!
//! This crate provides:
//! - An immutable dense polynomial value type with shallow `Clone`
//! - Addition, subtraction and schoolbook multiplication
//! - Tolerance-based equality, formatting and hashing
//! - A process-wide tolerance setting, plus explicit per-call tolerances
//!
//! ## Tolerance
//!
//! Every comparison treats two coefficients as equal when their absolute
//! difference does not exceed the tolerance. The process-wide default is
//! the smallest positive `f64` (a subnormal), which makes comparisons
//! effectively exact until a host application configures a coarser value.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod dense;
pub mod error;
pub mod settings;

#[cfg(test)]
mod proptests;

pub use dense::Polynomial;
pub use error::{Operand, PolyError, Result};
pub use settings::{AppSettings, GlobalSettings, Tolerance, DEFAULT_EPSILON};
