pub mod dyadic;
pub mod interval;

// re-export for cleaner imports
pub use self::dyadic::{Dyadic, DyadicFraction, Rounding};
pub use self::interval::Interval;
