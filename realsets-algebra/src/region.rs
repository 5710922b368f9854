use std::cmp::Ordering;
use std::fmt::{self, Display};

use realsets_core::models::{Dyadic, DyadicFraction, Interval};

use crate::endpoint::Endpoint;
use crate::errors::RegionError;
use crate::segment::Segment;

/// A subset of the extended real line in canonical form: an ordered
/// sequence of pairwise-disjoint segments with no two consecutive segments
/// touching.
///
/// Canonical form is unique, so the derived structural equality is set
/// equality. Regions are immutable values: every operation is a pure
/// transformation producing a new region, and all the merge algorithms are
/// explicit loops, so segment counts never translate into stack depth.
///
/// # Examples
///
/// ```
/// use realsets_algebra::Region;
///
/// let a = Region::open_segment(0, 1).unwrap();
/// let b = Region::closed_segment(1, 2).unwrap();
///
/// // the shared boundary at 1 is covered by b, so the union is one segment
/// assert_eq!(a.union(&b).to_string(), "(0,2]");
///
/// let gap = a.complement();
/// assert_eq!(gap.to_string(), "(-inf,0], [1,+inf)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Region {
    segments: Vec<Segment>,
}

impl Region {
    /// The empty region.
    pub fn empty() -> Region {
        Region {
            segments: Vec::new(),
        }
    }

    /// The whole extended real line.
    pub fn real_line() -> Region {
        Region {
            segments: vec![Segment::new_unchecked(
                Endpoint::NegInfinity,
                Endpoint::PosInfinity,
            )],
        }
    }

    /// The single point `[v, v]`.
    pub fn point(v: impl Into<DyadicFraction>) -> Region {
        let v = v.into();
        Region::of_segment(Segment::new_unchecked(
            Endpoint::Closed(v.clone()),
            Endpoint::Closed(v),
        ))
    }

    /// The open segment `(lo, hi)`. Rejects `lo >= hi`.
    pub fn open_segment(
        lo: impl Into<DyadicFraction>,
        hi: impl Into<DyadicFraction>,
    ) -> Result<Region, RegionError> {
        Segment::new(Endpoint::Open(lo.into()), Endpoint::Open(hi.into())).map(Region::of_segment)
    }

    /// The closed segment `[lo, hi]`. Rejects `lo > hi`.
    pub fn closed_segment(
        lo: impl Into<DyadicFraction>,
        hi: impl Into<DyadicFraction>,
    ) -> Result<Region, RegionError> {
        Segment::new(Endpoint::Closed(lo.into()), Endpoint::Closed(hi.into()))
            .map(Region::of_segment)
    }

    /// The ray `(-inf, hi)`.
    pub fn open_left_ray(hi: impl Into<DyadicFraction>) -> Region {
        Region::of_segment(Segment::new_unchecked(
            Endpoint::NegInfinity,
            Endpoint::Open(hi.into()),
        ))
    }

    /// The ray `(-inf, hi]`.
    pub fn closed_left_ray(hi: impl Into<DyadicFraction>) -> Region {
        Region::of_segment(Segment::new_unchecked(
            Endpoint::NegInfinity,
            Endpoint::Closed(hi.into()),
        ))
    }

    /// The ray `(lo, +inf)`.
    pub fn open_right_ray(lo: impl Into<DyadicFraction>) -> Region {
        Region::of_segment(Segment::new_unchecked(
            Endpoint::Open(lo.into()),
            Endpoint::PosInfinity,
        ))
    }

    /// The ray `[lo, +inf)`.
    pub fn closed_right_ray(lo: impl Into<DyadicFraction>) -> Region {
        Region::of_segment(Segment::new_unchecked(
            Endpoint::Closed(lo.into()),
            Endpoint::PosInfinity,
        ))
    }

    /// The single closed segment spanned by a bounded interval.
    pub fn of_interval(interval: &Interval) -> Result<Region, RegionError> {
        let left = Endpoint::closed_of_dyadic(interval.lower())?;
        let right = Endpoint::closed_of_dyadic(interval.upper())?;
        Segment::new(left, right).map(Region::of_segment)
    }

    fn of_segment(segment: Segment) -> Region {
        Region {
            segments: vec![segment],
        }
    }

    /// The canonical segments, sorted left to right.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Restores the no-touch invariant on a sequence already sorted by left
    /// endpoint: each adjacent touching pair merges into one segment, and a
    /// merge is re-examined against the following segment, so cascaded
    /// touches collapse in a single pass.
    fn normalize(segments: Vec<Segment>) -> Vec<Segment> {
        let mut out: Vec<Segment> = Vec::with_capacity(segments.len());
        for seg in segments {
            match out.last_mut() {
                Some(last) if last.touches(&seg) => last.right = seg.right,
                _ => out.push(seg),
            }
        }
        out
    }

    /// Set union.
    ///
    /// Merges the two canonical sequences in left-bound order, folding each
    /// incoming segment into the current one whenever they overlap or
    /// touch. The fold already collapses every contiguity, so the output is
    /// canonical without a separate normalization pass.
    pub fn union(&self, other: &Region) -> Region {
        let mut out: Vec<Segment> = Vec::with_capacity(self.segments.len() + other.segments.len());
        let (mut i, mut j) = (0, 0);
        let mut current: Option<Segment> = None;
        loop {
            let next = match (self.segments.get(i), other.segments.get(j)) {
                (None, None) => break,
                (Some(s), None) => {
                    i += 1;
                    s.clone()
                }
                (None, Some(t)) => {
                    j += 1;
                    t.clone()
                }
                (Some(s), Some(t)) => {
                    if s.left.cmp_left_bounds(&t.left) != Ordering::Greater {
                        i += 1;
                        s.clone()
                    } else {
                        j += 1;
                        t.clone()
                    }
                }
            };
            current = Some(match current.take() {
                None => next,
                Some(cur) => {
                    // `cur` starts at or before `next`, so contiguity is
                    // decided at cur's right boundary alone
                    if cur.contiguous_with(&next) {
                        let right = Endpoint::max_right(cur.right, next.right);
                        Segment::new_unchecked(cur.left, right)
                    } else {
                        out.push(cur);
                        next
                    }
                }
            });
        }
        if let Some(cur) = current {
            out.push(cur);
        }
        Region { segments: out }
    }

    /// Set intersection.
    ///
    /// Two-pointer merge: each step intersects the leading segments and
    /// advances whichever operand's segment ends first (a tie advances
    /// both); the candidate overlap is kept only when it bounds a nonempty
    /// set.
    pub fn intersection(&self, other: &Region) -> Region {
        let mut out: Vec<Segment> = Vec::new();
        let (mut i, mut j) = (0, 0);
        while let (Some(s), Some(t)) = (self.segments.get(i), other.segments.get(j)) {
            let left = Endpoint::max_left(s.left.clone(), t.left.clone());
            let right = Endpoint::min_right(s.right.clone(), t.right.clone());
            if Endpoint::is_interval(&left, &right) {
                out.push(Segment::new_unchecked(left, right));
            }
            match s.right.cmp_right_bounds(&t.right) {
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
                Ordering::Equal => {
                    i += 1;
                    j += 1;
                }
            }
        }
        Region { segments: out }
    }

    /// Set complement.
    ///
    /// Sweeps left to right from an implicit open bound at negative
    /// infinity, emitting the gap before each segment and the final
    /// unbounded gap; every gap boundary is the inverted closure of the
    /// segment boundary it meets.
    pub fn complement(&self) -> Region {
        let segments = Self::normalize(self.segments.clone());
        let mut out: Vec<Segment> = Vec::with_capacity(segments.len() + 1);
        let mut lower = Some(Endpoint::NegInfinity);
        for seg in &segments {
            if let Some(lo) = lower.take() {
                if seg.left != Endpoint::NegInfinity {
                    let hi = seg.left.invert_closure();
                    // canonical input: the gap is nonempty (at worst a
                    // degenerate point between two open boundaries)
                    out.push(Segment::new_unchecked(lo, hi));
                }
            }
            lower = match &seg.right {
                Endpoint::PosInfinity => None,
                bounded => Some(bounded.invert_closure()),
            };
        }
        if let Some(lo) = lower {
            out.push(Segment::new_unchecked(lo, Endpoint::PosInfinity));
        }
        Region { segments: out }
    }

    /// Topological closure: every open boundary becomes closed, infinities
    /// unchanged. One merge fold collapses segments whose closed boundaries
    /// now meet; no fix-point iteration is needed.
    pub fn closure(&self) -> Region {
        let mut out: Vec<Segment> = Vec::with_capacity(self.segments.len());
        for seg in &self.segments {
            let closed =
                Segment::new_unchecked(seg.left.closed_hull(), seg.right.closed_hull());
            match out.last_mut() {
                Some(last) if last.contiguous_with(&closed) => {
                    if last.right.cmp_right_bounds(&closed.right) == Ordering::Less {
                        last.right = closed.right;
                    }
                }
                _ => out.push(closed),
            }
        }
        Region { segments: out }
    }

    /// Whether every point of `self` lies in `other`.
    ///
    /// Merge over the two canonical sequences: each segment of `self` must
    /// be covered by a segment of `other` starting at or before it; when a
    /// covering segment ends early, the residue past its right boundary
    /// (left bound promoted by closure inversion) is checked against the
    /// next segment of `other`.
    pub fn subseteq(&self, other: &Region) -> bool {
        let mut j = 0;
        for seg in &self.segments {
            let mut left = seg.left.clone();
            loop {
                let Some(t) = other.segments.get(j) else {
                    return false;
                };
                if t.left.cmp_left_bounds(&left) == Ordering::Greater {
                    return false;
                }
                if seg.right.cmp_right_bounds(&t.right) != Ordering::Greater {
                    // covered; t may still cover later segments, keep it
                    break;
                }
                // t ends inside (or before) seg: consume the covered
                // prefix and retry the residue against the next segment.
                // t.right is finite here because seg.right exceeds it.
                let resumed = t.right.invert_closure();
                if resumed.cmp_left_bounds(&left) == Ordering::Greater {
                    left = resumed;
                }
                j += 1;
            }
        }
        true
    }

    pub fn is_empty(&self) -> bool {
        self.subseteq(&Region::empty())
    }

    pub fn is_inhabited(&self) -> bool {
        !self.is_empty()
    }

    /// Converts the region into bounded intervals, one per segment.
    ///
    /// Every segment must be bounded by closed endpoints or by an infinity
    /// paired with a closed endpoint; an open boundary anywhere, or a
    /// segment unbounded on both sides, is a recoverable error naming the
    /// rendered region.
    pub fn to_closed_intervals(&self) -> Result<Vec<Interval>, RegionError> {
        let mut out = Vec::with_capacity(self.segments.len());
        for seg in &self.segments {
            let lower = match &seg.left {
                Endpoint::NegInfinity => Dyadic::NegInfinity,
                Endpoint::Closed(v) => Dyadic::Finite(v.clone()),
                Endpoint::Open(_) | Endpoint::PosInfinity => {
                    return Err(RegionError::NotClosed(self.to_string()));
                }
            };
            let upper = match &seg.right {
                Endpoint::PosInfinity => Dyadic::PosInfinity,
                Endpoint::Closed(v) => Dyadic::Finite(v.clone()),
                Endpoint::Open(_) | Endpoint::NegInfinity => {
                    return Err(RegionError::NotClosed(self.to_string()));
                }
            };
            if lower == Dyadic::NegInfinity && upper == Dyadic::PosInfinity {
                return Err(RegionError::NotClosed(self.to_string()));
            }
            out.push(Interval::new(lower, upper)?);
        }
        Ok(out)
    }

    /// The greatest lower bound; positive infinity for the empty region.
    pub fn infimum(&self) -> Dyadic {
        match self.segments.first() {
            None => Dyadic::PosInfinity,
            Some(seg) => seg.left.to_dyadic(),
        }
    }

    /// The least upper bound; negative infinity for the empty region.
    pub fn supremum(&self) -> Dyadic {
        match self.segments.last() {
            None => Dyadic::NegInfinity,
            Some(seg) => seg.right.to_dyadic(),
        }
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return write!(f, "∅");
        }
        for (n, seg) in self.segments.iter().enumerate() {
            if n > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", seg)?;
        }
        Ok(())
    }
}
