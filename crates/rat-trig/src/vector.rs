//! Planar vector primitives: quadrance, dot, cross, and spread.
//!
//! Vectors are plain `[T; 2]` arrays. Component order matters because `cross`
//! is antisymmetric.
//!
//! ```text
//!            v2
//!            ^
//!            |    /
//!            |   /  v1
//!            |  /
//!            | /
//!            |/______>
//!           O
//!
//!   quad(v)      = v0^2 + v1^2
//!   cross(v, w)  = v0*w1 - v1*w0
//!   spread(v, w) = cross(v, w)^2 / (quad(v) * quad(w))
//! ```

use crate::numeric::Numeric;

/// A 2D vector with numeric components.
pub type Vector2<T> = [T; 2];

/// Quadrance (squared length) of `v`.
///
/// ```
/// use rat_trig::quad;
///
/// assert_eq!(quad([3, 4]), 25);
/// assert_eq!(quad([1, 2]), 5);
/// ```
#[inline]
pub fn quad<T: Numeric>(v: Vector2<T>) -> T {
    v[0] * v[0] + v[1] * v[1]
}

/// Dot product of `v_1` and `v_2`.
///
/// ```
/// use rat_trig::dot;
///
/// assert_eq!(dot([1, 2], [3, 4]), 11);
/// ```
#[inline]
pub fn dot<T: Numeric>(v_1: Vector2<T>, v_2: Vector2<T>) -> T {
    v_1[0] * v_2[0] + v_1[1] * v_2[1]
}

/// Signed cross product of `v_1` and `v_2` (twice the signed area of the
/// triangle they span from the origin). Positive for `v_1 → v_2`
/// counterclockwise.
///
/// ```
/// use rat_trig::cross;
///
/// assert_eq!(cross([1, 2], [3, 4]), -2);
/// assert_eq!(cross([3, 4], [1, 2]), 2);
/// ```
#[inline]
pub fn cross<T: Numeric>(v_1: Vector2<T>, v_2: Vector2<T>) -> T {
    v_1[0] * v_2[1] - v_1[1] * v_2[0]
}

/// Spread between `v_1` and `v_2`: the squared sine of the angle between them.
///
/// Zero for parallel vectors, one for perpendicular ones. A zero-quadrance
/// input makes the denominator zero; the division is left to `T`, so integers
/// and `Ratio` panic while floats return NaN.
///
/// ```
/// use rat_trig::spread;
/// use num_rational::Ratio;
///
/// let v_1 = [Ratio::from_integer(1), Ratio::from_integer(2)];
/// let v_2 = [Ratio::from_integer(3), Ratio::from_integer(4)];
/// assert_eq!(spread(v_1, v_2), Ratio::new(4, 125));
/// assert_eq!(spread([1.0, 2.0], [3.0, 4.0]), 0.032);
/// ```
#[inline]
pub fn spread<T: Numeric>(v_1: Vector2<T>, v_2: Vector2<T>) -> T {
    let c = cross(v_1, v_2);
    (c * c) / (quad(v_1) * quad(v_2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector2 as NaVec2;
    use num_rational::Ratio;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn quad_across_scalars() {
        assert_eq!(quad([3, 4]), 25);
        assert_eq!(quad([3.0, 4.0]), 25.0);
        assert_eq!(quad([Ratio::new(3, 5), Ratio::new(4, 5)]), Ratio::from_integer(1));
        assert_eq!(quad([1, 1]), 2);
        assert_eq!(quad([0, 0]), 0);
    }

    #[test]
    fn dot_across_scalars() {
        assert_eq!(dot([1, 2], [3, 4]), 11);
        assert_eq!(dot([1.0, 2.0], [3.0, 4.0]), 11.0);
        assert_eq!(
            dot(
                [Ratio::new(1, 2), Ratio::new(1, 4)],
                [Ratio::new(1, 6), Ratio::new(1, 8)]
            ),
            Ratio::new(11, 96)
        );
        assert_eq!(dot([1, 2], [-1, -2]), -5);
        assert_eq!(dot([1, 0], [0, 1]), 0);
    }

    #[test]
    fn cross_across_scalars() {
        assert_eq!(cross([1, 2], [3, 4]), -2);
        assert_eq!(cross([1.0, 2.0], [3.0, 4.0]), -2.0);
        assert_eq!(
            cross(
                [Ratio::new(1, 2), Ratio::new(1, 4)],
                [Ratio::new(1, 6), Ratio::new(1, 8)]
            ),
            Ratio::new(1, 48)
        );
        // parallel, then perpendicular
        assert_eq!(cross([1, 2], [1, 2]), 0);
        assert_eq!(cross([1, 0], [0, 1]), 1);
    }

    #[test]
    fn spread_across_scalars() {
        let v_1 = [Ratio::from_integer(1), Ratio::from_integer(2)];
        let v_2 = [Ratio::from_integer(3), Ratio::from_integer(4)];
        assert_eq!(spread(v_1, v_2), Ratio::new(4, 125));
        assert_eq!(spread([1.0, 2.0], [3.0, 4.0]), 0.032);
        // scaling both vectors leaves the spread unchanged
        assert_eq!(
            spread(
                [Ratio::new(1, 2), Ratio::new(1, 4)],
                [Ratio::new(1, 6), Ratio::new(1, 8)]
            ),
            Ratio::new(4, 125)
        );
        assert_eq!(spread([1, 2], [1, 2]), 0);
        assert_eq!(spread([1, 0], [0, 1]), 1);
        assert_eq!(spread([1, 2], [-2, -4]), 0);
    }

    #[test]
    fn spread_of_zero_vector_is_nan_for_floats() {
        assert!(spread([0.0f64, 0.0], [1.0, 2.0]).is_nan());
    }

    #[test]
    #[should_panic]
    fn spread_of_zero_vector_panics_for_integers() {
        let zero = std::hint::black_box([0i32, 0]);
        spread(zero, [1, 2]);
    }

    #[test]
    #[should_panic]
    fn spread_of_zero_vector_panics_for_ratio() {
        let zero = [Ratio::<i64>::from_integer(0); 2];
        spread(zero, [Ratio::from_integer(1), Ratio::from_integer(2)]);
    }

    #[test]
    fn primitives_match_nalgebra_seeded() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..64 {
            let a: [f64; 2] = [rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0)];
            let b: [f64; 2] = [rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0)];
            let na = NaVec2::from(a);
            let nb = NaVec2::from(b);
            assert!((cross(a, b) - na.perp(&nb)).abs() < 1e-12);
            assert!((dot(a, b) - na.dot(&nb)).abs() < 1e-12);
            assert!((quad(a) - na.norm_squared()).abs() < 1e-12);
        }
    }

    #[test]
    fn spread_matches_squared_sine_seeded() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..64 {
            let a: [f64; 2] = [rng.gen_range(0.1..3.0), rng.gen_range(0.1..3.0)];
            let b: [f64; 2] = [rng.gen_range(-3.0..-0.1), rng.gen_range(0.1..3.0)];
            let na = NaVec2::from(a);
            let nb = NaVec2::from(b);
            let sine = na.angle(&nb).sin();
            assert!((spread(a, b) - sine * sine).abs() < 1e-9);
        }
    }
}
