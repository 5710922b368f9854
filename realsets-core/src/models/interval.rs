use std::cmp::Ordering;
use std::fmt::{self, Display};

use crate::errors::CoreError;
use crate::models::dyadic::Dyadic;

/// A bounded interval `[lower, upper]` over the extended dyadic line.
///
/// The constructor validates its input: NaN bounds and inverted bounds are
/// rejected, so every `Interval` value satisfies `lower <= upper`.
///
/// # Examples
///
/// ```
/// use realsets_core::models::{Dyadic, DyadicFraction, Interval};
///
/// let iv = Interval::new(
///     Dyadic::Finite(DyadicFraction::from(0)),
///     Dyadic::Finite(DyadicFraction::from(1)),
/// )
/// .unwrap();
/// assert_eq!(iv.to_string(), "[0, 1]");
///
/// let inverted = Interval::new(
///     Dyadic::Finite(DyadicFraction::from(1)),
///     Dyadic::Finite(DyadicFraction::from(0)),
/// );
/// assert!(inverted.is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval {
    lower: Dyadic,
    upper: Dyadic,
}

impl Interval {
    pub fn new(lower: Dyadic, upper: Dyadic) -> Result<Self, CoreError> {
        if lower.is_nan() || upper.is_nan() {
            return Err(CoreError::NanBound);
        }
        if lower.partial_cmp(&upper) == Some(Ordering::Greater) {
            return Err(CoreError::InvertedBounds {
                lower: lower.to_string(),
                upper: upper.to_string(),
            });
        }
        Ok(Self { lower, upper })
    }

    pub fn lower(&self) -> &Dyadic {
        &self.lower
    }

    pub fn upper(&self) -> &Dyadic {
        &self.upper
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::dyadic::DyadicFraction;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn finite(v: i64) -> Dyadic {
        Dyadic::Finite(DyadicFraction::from(v))
    }

    #[rstest]
    fn test_valid_bounds() {
        let iv = Interval::new(finite(-2), finite(3)).unwrap();
        assert_eq!(iv.lower(), &finite(-2));
        assert_eq!(iv.upper(), &finite(3));

        // degenerate point interval is allowed
        assert!(Interval::new(finite(1), finite(1)).is_ok());

        // unbounded on either side
        assert!(Interval::new(Dyadic::NegInfinity, finite(0)).is_ok());
        assert!(Interval::new(finite(0), Dyadic::PosInfinity).is_ok());
    }

    #[rstest]
    fn test_inverted_bounds_rejected() {
        let err = Interval::new(finite(1), finite(0)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Inverted interval bounds: lower 1 exceeds upper 0"
        );
    }

    #[rstest]
    fn test_nan_bound_rejected() {
        assert!(Interval::new(Dyadic::Nan, finite(0)).is_err());
        assert!(Interval::new(finite(0), Dyadic::Nan).is_err());
    }
}
