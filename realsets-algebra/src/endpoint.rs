use std::cmp::Ordering;
use std::fmt::{self, Display};

use realsets_core::models::{Dyadic, DyadicFraction};

use crate::errors::RegionError;

/// A boundary of a set of reals.
///
/// `Closed(v)` includes `v`, `Open(v)` excludes it; the infinities never
/// carry a value and are never closed.
///
/// Endpoints that coincide numerically but differ in open/closed kind are
/// still totally ordered, and the correct order depends on the role the
/// endpoint plays in its segment. [`Endpoint::cmp_left_bounds`] and
/// [`Endpoint::cmp_right_bounds`] are the two entry points; every
/// higher-level algorithm goes through them instead of re-deriving the rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    NegInfinity,
    Open(DyadicFraction),
    Closed(DyadicFraction),
    PosInfinity,
}

impl Endpoint {
    /// Classifies a dyadic number into a closed endpoint.
    ///
    /// Finite values become `Closed`, the infinite classifications map to
    /// the corresponding infinity, and NaN is rejected.
    pub fn closed_of_dyadic(d: &Dyadic) -> Result<Endpoint, RegionError> {
        match d {
            Dyadic::Nan => Err(RegionError::NanBoundary),
            Dyadic::NegInfinity => Ok(Endpoint::NegInfinity),
            Dyadic::Finite(v) => Ok(Endpoint::Closed(v.clone())),
            Dyadic::PosInfinity => Ok(Endpoint::PosInfinity),
        }
    }

    /// Orders two endpoints acting as right bounds of their segments.
    ///
    /// At equal finite value an open endpoint is the smaller one: its
    /// excluded endpoint ends the set strictly before reaching the value.
    pub fn cmp_right_bounds(&self, other: &Endpoint) -> Ordering {
        use Endpoint::*;
        match (self, other) {
            (NegInfinity, NegInfinity) | (PosInfinity, PosInfinity) => Ordering::Equal,
            (NegInfinity, _) | (_, PosInfinity) => Ordering::Less,
            (_, NegInfinity) | (PosInfinity, _) => Ordering::Greater,
            (Open(v), Open(w)) | (Closed(v), Closed(w)) => v.cmp(w),
            (Open(v), Closed(w)) => v.cmp(w).then(Ordering::Less),
            (Closed(v), Open(w)) => v.cmp(w).then(Ordering::Greater),
        }
    }

    /// Orders two endpoints acting as left bounds of their segments.
    ///
    /// At equal finite value an open endpoint is the larger one: its set
    /// begins strictly after the value.
    pub fn cmp_left_bounds(&self, other: &Endpoint) -> Ordering {
        use Endpoint::*;
        match (self, other) {
            (NegInfinity, NegInfinity) | (PosInfinity, PosInfinity) => Ordering::Equal,
            (NegInfinity, _) | (_, PosInfinity) => Ordering::Less,
            (_, NegInfinity) | (PosInfinity, _) => Ordering::Greater,
            (Open(v), Open(w)) | (Closed(v), Closed(w)) => v.cmp(w),
            (Open(v), Closed(w)) => v.cmp(w).then(Ordering::Greater),
            (Closed(v), Open(w)) => v.cmp(w).then(Ordering::Less),
        }
    }

    pub fn min_left(a: Endpoint, b: Endpoint) -> Endpoint {
        if a.cmp_left_bounds(&b) == Ordering::Greater {
            b
        } else {
            a
        }
    }

    pub fn max_left(a: Endpoint, b: Endpoint) -> Endpoint {
        if a.cmp_left_bounds(&b) == Ordering::Less {
            b
        } else {
            a
        }
    }

    pub fn min_right(a: Endpoint, b: Endpoint) -> Endpoint {
        if a.cmp_right_bounds(&b) == Ordering::Greater {
            b
        } else {
            a
        }
    }

    pub fn max_right(a: Endpoint, b: Endpoint) -> Endpoint {
        if a.cmp_right_bounds(&b) == Ordering::Less {
            b
        } else {
            a
        }
    }

    /// Whether `(left, right)` bounds a nonempty set of reals.
    ///
    /// NegInfinity is never a right bound and PosInfinity never a left
    /// bound. Finite bounds must be strictly ordered, except that a
    /// Closed/Closed pair may be equal (a degenerate point). Open paired
    /// with Closed at equal value bounds the empty set and is rejected.
    pub fn is_interval(left: &Endpoint, right: &Endpoint) -> bool {
        use Endpoint::*;
        match (left, right) {
            (PosInfinity, _) | (_, NegInfinity) => false,
            (NegInfinity, _) | (_, PosInfinity) => true,
            (Closed(v), Closed(w)) => v <= w,
            (Open(v), Open(w)) | (Open(v), Closed(w)) | (Closed(v), Open(w)) => v < w,
        }
    }

    /// Swaps the closure of a finite endpoint: `Open(v)` becomes
    /// `Closed(v)` and vice versa.
    ///
    /// # Panics
    ///
    /// Panics on infinite endpoints. Callers reach this only behind the
    /// canonical-form invariants; an infinity here means an invariant broke
    /// upstream, which must not be papered over.
    pub fn invert_closure(&self) -> Endpoint {
        match self {
            Endpoint::Open(v) => Endpoint::Closed(v.clone()),
            Endpoint::Closed(v) => Endpoint::Open(v.clone()),
            Endpoint::NegInfinity | Endpoint::PosInfinity => {
                panic!("closure inversion is undefined for infinite endpoints")
            }
        }
    }

    /// The endpoint with its boundary value included, leaving infinities
    /// unchanged.
    pub fn closed_hull(&self) -> Endpoint {
        match self {
            Endpoint::Open(v) => Endpoint::Closed(v.clone()),
            other => other.clone(),
        }
    }

    /// The finite boundary value, if there is one.
    pub fn value(&self) -> Option<&DyadicFraction> {
        match self {
            Endpoint::Open(v) | Endpoint::Closed(v) => Some(v),
            Endpoint::NegInfinity | Endpoint::PosInfinity => None,
        }
    }

    /// The boundary as an extended dyadic number.
    pub fn to_dyadic(&self) -> Dyadic {
        match self {
            Endpoint::NegInfinity => Dyadic::NegInfinity,
            Endpoint::Open(v) | Endpoint::Closed(v) => Dyadic::Finite(v.clone()),
            Endpoint::PosInfinity => Dyadic::PosInfinity,
        }
    }
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::NegInfinity => write!(f, "-inf"),
            Endpoint::Open(v) | Endpoint::Closed(v) => write!(f, "{}", v),
            Endpoint::PosInfinity => write!(f, "+inf"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn frac(v: i64) -> DyadicFraction {
        DyadicFraction::from(v)
    }

    #[rstest]
    fn test_infinities_bracket_everything() {
        let closed = Endpoint::Closed(frac(0));
        assert_eq!(
            Endpoint::NegInfinity.cmp_left_bounds(&closed),
            Ordering::Less
        );
        assert_eq!(
            Endpoint::PosInfinity.cmp_right_bounds(&closed),
            Ordering::Greater
        );
        assert_eq!(
            Endpoint::NegInfinity.cmp_right_bounds(&Endpoint::NegInfinity),
            Ordering::Equal
        );
        assert_eq!(
            Endpoint::PosInfinity.cmp_left_bounds(&Endpoint::PosInfinity),
            Ordering::Equal
        );
    }

    #[rstest]
    fn test_coincident_values_ordered_by_role() {
        let open = Endpoint::Open(frac(1));
        let closed = Endpoint::Closed(frac(1));

        // as right bounds, [.., 1) ends before [.., 1]
        assert_eq!(open.cmp_right_bounds(&closed), Ordering::Less);
        assert_eq!(closed.cmp_right_bounds(&open), Ordering::Greater);

        // as left bounds, (1, ..] starts after [1, ..]
        assert_eq!(open.cmp_left_bounds(&closed), Ordering::Greater);
        assert_eq!(closed.cmp_left_bounds(&open), Ordering::Less);
    }

    #[rstest]
    fn test_distinct_values_ignore_closure() {
        let a = Endpoint::Open(frac(1));
        let b = Endpoint::Closed(frac(2));
        assert_eq!(a.cmp_left_bounds(&b), Ordering::Less);
        assert_eq!(a.cmp_right_bounds(&b), Ordering::Less);
    }

    #[rstest]
    fn test_is_interval() {
        use Endpoint::*;
        assert!(Endpoint::is_interval(&Closed(frac(0)), &Closed(frac(0))));
        assert!(Endpoint::is_interval(&Open(frac(0)), &Open(frac(1))));
        assert!(Endpoint::is_interval(&NegInfinity, &Open(frac(0))));
        assert!(Endpoint::is_interval(&NegInfinity, &PosInfinity));

        assert!(!Endpoint::is_interval(&Open(frac(0)), &Open(frac(0))));
        assert!(!Endpoint::is_interval(&Open(frac(0)), &Closed(frac(0))));
        assert!(!Endpoint::is_interval(&Closed(frac(0)), &Open(frac(0))));
        assert!(!Endpoint::is_interval(&Closed(frac(1)), &Closed(frac(0))));
        assert!(!Endpoint::is_interval(&PosInfinity, &PosInfinity));
        assert!(!Endpoint::is_interval(&NegInfinity, &NegInfinity));
    }

    #[rstest]
    fn test_invert_closure() {
        assert_eq!(
            Endpoint::Open(frac(2)).invert_closure(),
            Endpoint::Closed(frac(2))
        );
        assert_eq!(
            Endpoint::Closed(frac(2)).invert_closure(),
            Endpoint::Open(frac(2))
        );
    }

    #[rstest]
    #[should_panic(expected = "closure inversion is undefined")]
    fn test_invert_closure_panics_on_infinity() {
        Endpoint::PosInfinity.invert_closure();
    }

    #[rstest]
    fn test_closed_of_dyadic() {
        assert_eq!(
            Endpoint::closed_of_dyadic(&Dyadic::Finite(frac(3))).unwrap(),
            Endpoint::Closed(frac(3))
        );
        assert_eq!(
            Endpoint::closed_of_dyadic(&Dyadic::NegInfinity).unwrap(),
            Endpoint::NegInfinity
        );
        assert_eq!(
            Endpoint::closed_of_dyadic(&Dyadic::PosInfinity).unwrap(),
            Endpoint::PosInfinity
        );
        assert!(Endpoint::closed_of_dyadic(&Dyadic::Nan).is_err());
    }
}
