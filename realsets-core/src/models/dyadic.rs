use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::ops::{Add, Mul, Neg};

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

/// Rounding direction for arithmetic that would round in a bounded-precision
/// setting.
///
/// Dyadic fractions of arbitrary precision never actually round: doubling and
/// averaging are exact. The direction is part of the contract so that callers
/// written against a bounded-precision number type keep working unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rounding {
    TowardNegInfinity,
    TowardPosInfinity,
}

/// An exact binary fraction `mantissa * 2^exponent`.
///
/// The representation is kept normalized: the mantissa is odd (or zero, with
/// exponent zero), so every value has exactly one representation and the
/// derived structural equality is numeric equality.
///
/// # Examples
///
/// ```
/// use realsets_core::models::DyadicFraction;
///
/// let half = DyadicFraction::new(1, -1);
/// let quarter = DyadicFraction::new(1, -2);
/// assert!(quarter < half);
/// assert_eq!(half.to_string(), "0.5");
///
/// // 2/4 and 1/2 normalize to the same value
/// assert_eq!(DyadicFraction::new(2, -2), half);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DyadicFraction {
    mantissa: BigInt,
    exponent: i64,
}

impl DyadicFraction {
    /// Creates the fraction `mantissa * 2^exponent`, normalizing the
    /// representation by stripping trailing zero bits from the mantissa.
    pub fn new(mantissa: impl Into<BigInt>, exponent: i64) -> Self {
        let mut mantissa = mantissa.into();
        if mantissa.is_zero() {
            return Self {
                mantissa,
                exponent: 0,
            };
        }
        let mut exponent = exponent;
        if let Some(tz) = mantissa.trailing_zeros() {
            if tz > 0 {
                mantissa >>= tz as usize;
                exponent += tz as i64;
            }
        }
        Self { mantissa, exponent }
    }

    /// The constant `-1`.
    pub fn neg_one() -> Self {
        Self::new(-1, 0)
    }

    pub fn is_negative(&self) -> bool {
        self.mantissa.is_negative()
    }

    pub fn is_positive(&self) -> bool {
        self.mantissa.is_positive()
    }

    /// The exact average `(self + other) / 2`.
    ///
    /// Dyadic fractions are closed under halving, so no rounding occurs.
    pub fn average(&self, other: &Self) -> Self {
        let (a, b, e) = self.aligned(other);
        Self::new(a + b, e - 1)
    }

    /// The exact double `2 * self`.
    ///
    /// The rounding direction is accepted for contract compatibility with
    /// bounded-precision number types; doubling a dyadic is always exact.
    pub fn double(&self, _direction: Rounding) -> Self {
        Self {
            mantissa: self.mantissa.clone(),
            exponent: if self.mantissa.is_zero() {
                0
            } else {
                self.exponent + 1
            },
        }
    }

    /// Brings both mantissas to the smaller of the two exponents.
    fn aligned(&self, other: &Self) -> (BigInt, BigInt, i64) {
        let e = self.exponent.min(other.exponent);
        let a = self.mantissa.clone() << ((self.exponent - e) as usize);
        let b = other.mantissa.clone() << ((other.exponent - e) as usize);
        (a, b, e)
    }

    /// Exact decimal rendering. Finite by construction: the denominator
    /// `2^k` divides `10^k`.
    fn as_string(&self) -> String {
        if self.exponent >= 0 {
            let shifted = self.mantissa.clone() << (self.exponent as usize);
            return shifted.to_string();
        }
        let k = (-self.exponent) as usize;
        let scaled = self.mantissa.clone() * num_traits::pow(BigInt::from(5), k);
        let sign = if scaled.is_negative() { "-" } else { "" };
        let mut digits = scaled.magnitude().to_string();
        if digits.len() <= k {
            digits = format!("{}{}", "0".repeat(k + 1 - digits.len()), digits);
        }
        digits.insert(digits.len() - k, '.');
        format!("{}{}", sign, digits)
    }
}

impl Ord for DyadicFraction {
    fn cmp(&self, other: &Self) -> Ordering {
        let signs = self.mantissa.sign().cmp(&other.mantissa.sign());
        if signs != Ordering::Equal {
            return signs;
        }
        let (a, b, _) = self.aligned(other);
        a.cmp(&b)
    }
}

impl PartialOrd for DyadicFraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for DyadicFraction {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let (a, b, e) = self.aligned(&rhs);
        Self::new(a + b, e)
    }
}

impl Mul for DyadicFraction {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(self.mantissa * rhs.mantissa, self.exponent + rhs.exponent)
    }
}

impl Neg for DyadicFraction {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            mantissa: -self.mantissa,
            exponent: self.exponent,
        }
    }
}

impl Zero for DyadicFraction {
    fn zero() -> Self {
        Self::new(0, 0)
    }

    fn is_zero(&self) -> bool {
        self.mantissa.is_zero()
    }
}

impl One for DyadicFraction {
    fn one() -> Self {
        Self::new(1, 0)
    }
}

impl From<i32> for DyadicFraction {
    fn from(value: i32) -> Self {
        Self::new(value, 0)
    }
}

impl From<i64> for DyadicFraction {
    fn from(value: i64) -> Self {
        Self::new(value, 0)
    }
}

impl Display for DyadicFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

/// A dyadic number extended with the non-finite classifications.
///
/// The variants are the classification itself: matching on a `Dyadic` is how
/// callers distinguish finite values, NaN and the two infinities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dyadic {
    NegInfinity,
    Finite(DyadicFraction),
    PosInfinity,
    Nan,
}

impl Dyadic {
    pub fn is_nan(&self) -> bool {
        matches!(self, Dyadic::Nan)
    }

    pub fn is_finite(&self) -> bool {
        matches!(self, Dyadic::Finite(_))
    }
}

impl PartialOrd for Dyadic {
    /// Ordering of the extended line; `None` whenever NaN is involved.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        use Dyadic::*;
        match (self, other) {
            (Nan, _) | (_, Nan) => None,
            (NegInfinity, NegInfinity) | (PosInfinity, PosInfinity) => Some(Ordering::Equal),
            (NegInfinity, _) | (_, PosInfinity) => Some(Ordering::Less),
            (_, NegInfinity) | (PosInfinity, _) => Some(Ordering::Greater),
            (Finite(a), Finite(b)) => Some(a.cmp(b)),
        }
    }
}

impl From<DyadicFraction> for Dyadic {
    fn from(value: DyadicFraction) -> Self {
        Dyadic::Finite(value)
    }
}

impl Display for Dyadic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dyadic::NegInfinity => write!(f, "-inf"),
            Dyadic::Finite(v) => write!(f, "{}", v),
            Dyadic::PosInfinity => write!(f, "+inf"),
            Dyadic::Nan => write!(f, "nan"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(0, 5, "0")]
    #[case(3, 0, "3")]
    #[case(1, -1, "0.5")]
    #[case(-5, -2, "-1.25")]
    #[case(1, -3, "0.125")]
    #[case(3, 2, "12")]
    fn test_decimal_rendering(#[case] mantissa: i64, #[case] exponent: i64, #[case] expected: &str) {
        assert_eq!(DyadicFraction::new(mantissa, exponent).to_string(), expected);
    }

    #[rstest]
    fn test_normalization() {
        assert_eq!(DyadicFraction::new(4, -2), DyadicFraction::one());
        assert_eq!(DyadicFraction::new(6, -1), DyadicFraction::from(3));
        assert_eq!(DyadicFraction::new(0, 17), DyadicFraction::zero());
    }

    #[rstest]
    fn test_ordering() {
        let half = DyadicFraction::new(1, -1);
        let quarter = DyadicFraction::new(1, -2);
        assert!(quarter < half);
        assert!(DyadicFraction::neg_one() < DyadicFraction::zero());
        assert!(DyadicFraction::new(-1, -2) > DyadicFraction::neg_one());
        assert_eq!(half.cmp(&DyadicFraction::new(2, -2)), Ordering::Equal);
    }

    #[rstest]
    fn test_average_is_exact() {
        let a = DyadicFraction::zero();
        let b = DyadicFraction::one();
        assert_eq!(a.average(&b), DyadicFraction::new(1, -1));

        let c = DyadicFraction::new(3, -1); // 1.5
        let d = DyadicFraction::new(1, -2); // 0.25
        assert_eq!(c.average(&d), DyadicFraction::new(7, -3)); // 0.875
    }

    #[rstest]
    #[case(Rounding::TowardPosInfinity)]
    #[case(Rounding::TowardNegInfinity)]
    fn test_double_ignores_direction(#[case] direction: Rounding) {
        let v = DyadicFraction::new(3, -1);
        assert_eq!(v.double(direction), DyadicFraction::from(3));
        assert_eq!(
            DyadicFraction::zero().double(direction),
            DyadicFraction::zero()
        );
    }

    #[rstest]
    fn test_extended_ordering() {
        let one = Dyadic::Finite(DyadicFraction::one());
        assert!(Dyadic::NegInfinity < one);
        assert!(one < Dyadic::PosInfinity);
        assert!(Dyadic::NegInfinity < Dyadic::PosInfinity);
        assert_eq!(Dyadic::Nan.partial_cmp(&one), None);
    }
}
