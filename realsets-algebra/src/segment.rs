use std::cmp::Ordering;
use std::fmt::{self, Display};

use num_traits::{One, Zero};
use realsets_core::models::{DyadicFraction, Rounding};

use crate::endpoint::Endpoint;
use crate::errors::RegionError;

/// One interval of the extended real line: the reals satisfying the left
/// bound and the right bound simultaneously.
///
/// Every constructed `Segment` is well-formed per
/// [`Endpoint::is_interval`]; the unchecked constructor is crate-internal
/// and reserved for algorithm outputs the invariants already guarantee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub(crate) left: Endpoint,
    pub(crate) right: Endpoint,
}

impl Segment {
    /// Creates a segment, rejecting pairs that bound no set: inverted
    /// bounds, an infinity on the wrong side, or an open/closed pair at
    /// equal value.
    pub fn new(left: Endpoint, right: Endpoint) -> Result<Self, RegionError> {
        if Endpoint::is_interval(&left, &right) {
            Ok(Self { left, right })
        } else {
            Err(RegionError::MalformedSegment(
                Self { left, right }.to_string(),
            ))
        }
    }

    /// Creates a segment the caller has already proven well-formed.
    pub(crate) fn new_unchecked(left: Endpoint, right: Endpoint) -> Self {
        debug_assert!(
            Endpoint::is_interval(&left, &right),
            "segment bounds violate well-formedness"
        );
        Self { left, right }
    }

    pub fn left(&self) -> &Endpoint {
        &self.left
    }

    pub fn right(&self) -> &Endpoint {
        &self.right
    }

    /// Whether this segment's right boundary and `next`'s left boundary
    /// coincide with complementary open/closed kind, so their union covers
    /// the shared value continuously and the two must merge.
    pub fn touches(&self, next: &Segment) -> bool {
        match (&self.right, &next.left) {
            (Endpoint::Open(v), Endpoint::Closed(w)) | (Endpoint::Closed(v), Endpoint::Open(w)) => {
                v == w
            }
            _ => false,
        }
    }

    /// Whether the union of this segment and `next` is one contiguous
    /// segment, assuming `next` does not start before this segment does.
    ///
    /// True on overlap, and on coincident boundary values when at least one
    /// side is closed (a Closed/Closed meeting overlaps in a point, an
    /// Open/Closed meeting touches; Open/Open leaves the point uncovered).
    pub(crate) fn contiguous_with(&self, next: &Segment) -> bool {
        match (&self.right, &next.left) {
            (Endpoint::PosInfinity, _) | (_, Endpoint::NegInfinity) => true,
            (r, l) => match (r.value(), l.value()) {
                (Some(v), Some(w)) => match v.cmp(w) {
                    Ordering::Greater => true,
                    Ordering::Less => false,
                    Ordering::Equal => {
                        matches!(r, Endpoint::Closed(_)) || matches!(l, Endpoint::Closed(_))
                    }
                },
                _ => unreachable!("infinite endpoint on the wrong side of a segment"),
            },
        }
    }

    /// A finite point to bisect this segment at.
    ///
    /// Two finite boundaries average exactly. A one-sided unbounded segment
    /// gets a finite proxy that moves outward under iteration: the finite
    /// boundary doubled when it already lies at least one unit out in the
    /// unbounded direction, and `1` (or `-1`) otherwise, so the proxy stays
    /// inside the segment. The fully unbounded segment bisects at zero.
    ///
    /// Degenerate (single-point) and inverted pairs have nothing to bisect
    /// and are rejected.
    pub fn midpoint(&self) -> Result<DyadicFraction, RegionError> {
        use Endpoint::*;
        match (&self.left, &self.right) {
            (PosInfinity, _) | (_, NegInfinity) => {
                Err(RegionError::InvalidBisection(self.to_string()))
            }
            (NegInfinity, PosInfinity) => Ok(DyadicFraction::zero()),
            (Open(v) | Closed(v), PosInfinity) => {
                if *v >= DyadicFraction::one() {
                    Ok(v.double(Rounding::TowardPosInfinity))
                } else {
                    Ok(DyadicFraction::one())
                }
            }
            (NegInfinity, Open(v) | Closed(v)) => {
                if *v <= DyadicFraction::neg_one() {
                    Ok(v.double(Rounding::TowardNegInfinity))
                } else {
                    Ok(DyadicFraction::neg_one())
                }
            }
            (Open(v) | Closed(v), Open(w) | Closed(w)) => {
                if v >= w {
                    return Err(RegionError::InvalidBisection(self.to_string()));
                }
                Ok(v.average(w))
            }
        }
    }

    /// Splits the segment into two halves overlapping at the midpoint,
    /// `(left, [m])` and `([m], right)`, for external refinement loops.
    pub fn split(&self) -> Result<(Segment, Segment), RegionError> {
        let m = self.midpoint()?;
        Ok((
            Segment::new_unchecked(self.left.clone(), Endpoint::Closed(m.clone())),
            Segment::new_unchecked(Endpoint::Closed(m), self.right.clone()),
        ))
    }
}

impl Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.left {
            Endpoint::NegInfinity => write!(f, "(-inf,")?,
            Endpoint::Open(v) => write!(f, "({},", v)?,
            Endpoint::Closed(v) => write!(f, "[{},", v)?,
            // renders only from error paths on malformed pairs
            Endpoint::PosInfinity => write!(f, "(+inf,")?,
        }
        match &self.right {
            Endpoint::NegInfinity => write!(f, "-inf)"),
            Endpoint::Open(v) => write!(f, "{})", v),
            Endpoint::Closed(v) => write!(f, "{}]", v),
            Endpoint::PosInfinity => write!(f, "+inf)"),
        }
    }
}
