//! Core numeric models for the realsets project.
//!
//! This crate supplies the two collaborators the region algebra in
//! `realsets-algebra` is built on:
//!
//! - [`models::DyadicFraction`] / [`models::Dyadic`] — exact binary
//!   fractions of arbitrary precision, with exact comparison, averaging and
//!   doubling, plus the extended classifications (NaN, the two infinities).
//! - [`models::Interval`] — a validated bounded interval, used to round-trip
//!   single intervals into and out of the algebra.
//!
//! Nothing here approximates: every operation is exact, so comparisons never
//! suffer floating-point boundary artifacts.

pub mod errors;
pub mod models;

pub use errors::CoreError;
pub use models::{Dyadic, DyadicFraction, Interval, Rounding};
