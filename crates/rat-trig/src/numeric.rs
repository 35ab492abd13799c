//! Scalar contract shared by every formula.
//!
//! Any `Copy` type with the four field operations and the constants 0 and 1
//! qualifies: machine integers, `f32`/`f64`, `num_rational::Ratio<_>`, or a
//! caller-supplied exact type. Ordering is not required, so nothing in this
//! crate branches on sign.

use num_traits::{One, Zero};
use std::ops::{Add, Div, Mul, Sub};

/// A scalar usable in rational trigonometry calculations.
///
/// Implemented automatically for every type meeting the bounds; a type that
/// lacks one of the operations is rejected at compile time.
///
/// ```
/// use rat_trig::Numeric;
///
/// assert_eq!(i32::four(), 4);
/// assert_eq!(f64::four(), 4.0);
/// ```
pub trait Numeric:
    Copy
    + PartialEq
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// The constant 4, built from `1` so no integer conversion is needed.
    #[inline]
    fn four() -> Self {
        let two = Self::one() + Self::one();
        two + two
    }
}

impl<T> Numeric for T where
    T: Copy
        + PartialEq
        + Zero
        + One
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_rational::Ratio;

    fn constants<T: Numeric>() -> (T, T, T) {
        (T::zero(), T::one(), T::four())
    }

    #[test]
    fn constants_for_builtin_scalars() {
        assert_eq!(constants::<i32>(), (0, 1, 4));
        assert_eq!(constants::<u8>(), (0, 1, 4));
        assert_eq!(constants::<i64>(), (0, 1, 4));
        assert_eq!(constants::<f32>(), (0.0, 1.0, 4.0));
        assert_eq!(constants::<f64>(), (0.0, 1.0, 4.0));
    }

    #[test]
    fn constants_for_ratio() {
        let (z, o, f) = constants::<Ratio<i64>>();
        assert_eq!(z, Ratio::from_integer(0));
        assert_eq!(o, Ratio::from_integer(1));
        assert_eq!(f, Ratio::from_integer(4));
    }
}
