use rstest::*;

use realsets::algebra::Region;
use realsets::core::models::{Dyadic, DyadicFraction};

#[fixture]
fn unit_closed() -> Region {
    Region::closed_segment(0, 1).unwrap()
}

#[fixture]
fn unit_open() -> Region {
    Region::open_segment(0, 1).unwrap()
}

mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[rstest]
    fn test_union_folds_touching_boundary(unit_open: Region) {
        let r = unit_open.union(&Region::closed_segment(1, 2).unwrap());
        assert_eq!(r.to_string(), "(0,2]");
    }

    #[rstest]
    fn test_intersection_of_closed_segments() {
        let a = Region::closed_segment(0, 2).unwrap();
        let b = Region::closed_segment(1, 3).unwrap();
        assert_eq!(a.intersection(&b).to_string(), "[1,2]");
    }

    #[rstest]
    fn test_complement_of_closed_segment(unit_closed: Region) {
        assert_eq!(
            unit_closed.complement().to_string(),
            "(-inf,0), (1,+inf)"
        );
    }

    #[rstest]
    fn test_containment_across_boundary_kinds(unit_closed: Region) {
        assert!(unit_closed.subseteq(&Region::open_segment(-1, 2).unwrap()));
        assert!(!unit_closed.subseteq(&Region::open_segment(0, 1).unwrap()));
    }

    #[rstest]
    fn test_closed_interval_round_trip(unit_closed: Region, unit_open: Region) {
        let intervals = unit_closed.to_closed_intervals().unwrap();
        assert_eq!(intervals.len(), 1);
        assert_eq!(intervals[0].lower(), &Dyadic::Finite(DyadicFraction::from(0)));
        assert_eq!(intervals[0].upper(), &Dyadic::Finite(DyadicFraction::from(1)));
        assert_eq!(Region::of_interval(&intervals[0]).unwrap(), unit_closed);

        assert!(unit_open.to_closed_intervals().is_err());
    }

    #[rstest]
    fn test_bisection_of_unbounded_ray() {
        let ray = Region::open_right_ray(1);
        let segment = &ray.segments()[0];
        assert_eq!(segment.midpoint().unwrap(), DyadicFraction::from(2));

        let (lo, hi) = segment.split().unwrap();
        assert_eq!(lo.to_string(), "(1,2]");
        assert_eq!(hi.to_string(), "[2,+inf)");
    }

    #[rstest]
    fn test_extrema_of_empty_region() {
        assert_eq!(Region::empty().infimum(), Dyadic::PosInfinity);
        assert_eq!(Region::empty().supremum(), Dyadic::NegInfinity);
    }

    #[rstest]
    fn test_exact_fractional_boundaries(unit_closed: Region) {
        let half = DyadicFraction::new(1, -1);
        let left = Region::closed_segment(DyadicFraction::from(0), half.clone()).unwrap();
        let right = Region::open_segment(half, DyadicFraction::from(1)).unwrap();
        assert_eq!(left.union(&right).to_string(), "[0,1)");
        assert!(left.union(&right).subseteq(&unit_closed));
    }
}
