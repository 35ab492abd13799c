//! Triangle formulas over quadrances and spreads.
//!
//! Quadrances are passed positionally; `q_3` is always the side opposite the
//! spread being computed or used. Geometric validity of the inputs is the
//! caller's concern.
//!
//! ```text
//!           A
//!           |\
//!           | \
//!        q1 |  \ q3
//!           |   \
//!           |    \
//!           B-----C
//!             q2
//! ```

use crate::numeric::Numeric;

/// Archimedes' formula: sixteen times the squared area of the triangle with
/// quadrances `q_1`, `q_2`, `q_3`.
///
/// Zero exactly when the triangle is degenerate (collinear points), which also
/// makes it usable as a concyclic test for four quadrances. Any inputs are
/// accepted, including negative ones.
///
/// ```
/// use rat_trig::archimedes;
/// use num_rational::Ratio;
///
/// assert_eq!(archimedes(2, 4, 6), 32);
/// assert_eq!(archimedes(1, 4, 9), 0);
/// assert_eq!(
///     archimedes(Ratio::new(1, 2), Ratio::new(1, 4), Ratio::new(1, 6)),
///     Ratio::new(23, 144)
/// );
/// ```
#[inline]
pub fn archimedes<T: Numeric>(q_1: T, q_2: T, q_3: T) -> T {
    let temp = q_1 + q_2 - q_3;
    T::four() * q_1 * q_2 - temp * temp
}

/// Law of spreads: the spread opposite `q_3`,
/// `archimedes(q_1, q_2, q_3) / (4 q_1 q_2)`.
///
/// `q_1` or `q_2` equal to zero leaves the division to `T`. Integer scalars
/// truncate, so `spread_law(1, 1, 4)` is `0` for `i32`.
///
/// ```
/// use rat_trig::spread_law;
///
/// assert_eq!(spread_law(5.0, 25.0, 20.0), 0.8);
/// assert_eq!(spread_law(1, 1, 4), 0);
/// ```
#[inline]
pub fn spread_law<T: Numeric>(q_1: T, q_2: T, q_3: T) -> T {
    archimedes(q_1, q_2, q_3) / (T::four() * q_1 * q_2)
}

/// Triple quad formula: `(q_1 + q_2)^2 - 4 q_1 q_2 (1 - s_3)`.
///
/// Given two quadrances and the spread `s_3` between them, this is the
/// rational analogue of the law of cosines. With `s_3 = 0` it reduces to
/// `(q_1 - q_2)^2`, with `s_3 = 1` to `(q_1 + q_2)^2`.
///
/// ```
/// use rat_trig::triple_quad_formula;
/// use num_rational::Ratio;
///
/// let q_1 = Ratio::from_integer(5);
/// let q_2 = Ratio::from_integer(25);
/// let s_3 = Ratio::new(4, 125);
/// assert_eq!(triple_quad_formula(q_1, q_2, s_3), Ratio::from_integer(416));
/// ```
#[inline]
pub fn triple_quad_formula<T: Numeric>(q_1: T, q_2: T, s_3: T) -> T {
    let sum = q_1 + q_2;
    sum * sum - T::four() * q_1 * q_2 * (T::one() - s_3)
}
