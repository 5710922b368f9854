//! A Boolean algebra over the extended real line, generated by open, closed
//! and unbounded intervals with exact dyadic boundaries.
//!
//! This crate is part of the realsets project. It represents semi-decidable
//! subsets of the real line — the kind produced by evaluating a real-valued
//! predicate with bounded precision — and keeps them in a canonical form
//! that stays valid under every set-algebraic operation. Three sources of
//! subtlety are handled once, centrally:
//!
//! - **Unbounded endpoints**: rays and the whole line are first-class.
//! - **Open vs closed boundaries at coincident values**: a role-directed
//!   comparator ([`Endpoint::cmp_left_bounds`] / [`Endpoint::cmp_right_bounds`])
//!   is the single place the ordering rule lives.
//! - **Exact comparison**: boundaries are dyadic fractions from
//!   [`realsets_core`], never floating point.
//!
//! ## Quick Start
//!
//! ```rust
//! use realsets_algebra::Region;
//!
//! let a = Region::open_segment(0, 1).unwrap();
//! let b = Region::closed_segment(1, 2).unwrap();
//!
//! // b covers the boundary point 1, so the union folds into one segment
//! let u = a.union(&b);
//! assert_eq!(u.to_string(), "(0,2]");
//!
//! // complement sweeps out the gaps
//! assert_eq!(u.complement().to_string(), "(-inf,0], (2,+inf)");
//!
//! // containment respects boundary kinds exactly
//! assert!(a.subseteq(&u));
//! assert!(!u.subseteq(&a));
//! ```
//!
//! All values are immutable; operations are pure transformations producing
//! new canonical regions, so regions can be shared freely across threads.
//! The merge algorithms are explicit loops: recursion depth never scales
//! with segment count.

/// Set boundaries and the role-directed comparator.
///
/// See [`Endpoint`] for details.
pub mod endpoint;

/// Error types for invalid constructions and failed conversions.
pub mod errors;

/// Canonical segment sequences and the set algebra.
///
/// See [`Region`] for the main type.
pub mod region;

/// Single intervals of the line, with bisection support.
///
/// See [`Segment`] for details.
pub mod segment;

// re-exports
pub use self::endpoint::Endpoint;
pub use self::errors::RegionError;
pub use self::region::Region;
pub use self::segment::Segment;
