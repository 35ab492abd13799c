use num_rational::Ratio;
use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, One, Zero};
use pyo3::exceptions::{PyOverflowError, PyZeroDivisionError};
use pyo3::prelude::*;
use std::ops::{Add, Div, Mul, Sub};

pub type Frac = Ratio<i64>;
/// Fraction as seen from Python: `(numerator, denominator)`.
pub type PyFrac = (i64, i64);

/// `Ratio<i64>` whose arithmetic yields `None` on overflow instead of
/// panicking (debug) or wrapping (release). Once `None`, always `None`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Checked(pub Option<Frac>);

impl Checked {
    fn zip_with(self, rhs: Self, op: impl FnOnce(&Frac, &Frac) -> Option<Frac>) -> Self {
        Checked(self.0.zip(rhs.0).and_then(|(a, b)| op(&a, &b)))
    }
}

impl From<Frac> for Checked {
    fn from(r: Frac) -> Self {
        Checked(Some(r))
    }
}

impl Add for Checked {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self.zip_with(rhs, Frac::checked_add)
    }
}

impl Sub for Checked {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self.zip_with(rhs, Frac::checked_sub)
    }
}

impl Mul for Checked {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.zip_with(rhs, Frac::checked_mul)
    }
}

// Division by zero also gives `None`; callers check divisors first so it
// surfaces as ZeroDivisionError rather than OverflowError.
impl Div for Checked {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        self.zip_with(rhs, Frac::checked_div)
    }
}

impl Zero for Checked {
    fn zero() -> Self {
        Frac::zero().into()
    }

    fn is_zero(&self) -> bool {
        self.0.is_some_and(|r| r.is_zero())
    }
}

impl One for Checked {
    fn one() -> Self {
        Frac::one().into()
    }
}

pub fn frac_from_py((numer, denom): PyFrac) -> PyResult<Checked> {
    if denom == 0 {
        return Err(PyZeroDivisionError::new_err(format!(
            "fraction {numer}/0 has a zero denominator"
        )));
    }
    // reducing i64::MIN may negate it
    if numer == i64::MIN || denom == i64::MIN {
        return Err(PyOverflowError::new_err(format!(
            "fraction {numer}/{denom} is out of range"
        )));
    }
    Ok(Frac::new(numer, denom).into())
}

pub fn frac_to_py(r: Checked) -> PyResult<PyFrac> {
    r.0.map(|r| (*r.numer(), *r.denom())).ok_or_else(|| {
        PyOverflowError::new_err("result does not fit a fraction of 64-bit integers")
    })
}

pub fn vec_from_py(v: (PyFrac, PyFrac)) -> PyResult<[Checked; 2]> {
    Ok([frac_from_py(v.0)?, frac_from_py(v.1)?])
}

/// Reject a zero divisor before the division turns it into `None`.
pub fn nonzero_divisor(d: Checked, what: &str) -> PyResult<()> {
    if d.is_zero() {
        Err(PyZeroDivisionError::new_err(format!("{what} is zero")))
    } else {
        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn raises<E: pyo3::PyTypeInfo, T>(result: PyResult<T>) -> bool {
    pyo3::prepare_freethreaded_python();
    Python::with_gil(|py| result.is_err_and(|err| err.is_instance_of::<E>(py)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(numer: i64, denom: i64) -> Checked {
        Frac::new(numer, denom).into()
    }

    #[test]
    fn exact_arithmetic_matches_ratio() {
        assert_eq!(c(1, 2) + c(1, 3), c(5, 6));
        assert_eq!(c(1, 2) - c(1, 3), c(1, 6));
        assert_eq!(c(2, 3) * c(3, 4), c(1, 2));
        assert_eq!(c(2, 3) / c(4, 3), c(1, 2));
        assert!(Checked::zero().is_zero());
        assert_eq!(Checked::one(), c(7, 7));
    }

    #[test]
    fn overflow_is_sticky_none() {
        let big = c(i64::MAX, 1);
        assert_eq!(big + Checked::one(), Checked(None));
        assert_eq!(big * c(2, 1), Checked(None));
        assert_eq!(c(1, i64::MAX) * c(1, 2), Checked(None));
        assert_eq!((big + big) - big, Checked(None));
        assert!(!Checked(None).is_zero());
    }

    #[test]
    fn formulas_run_on_checked_scalars() {
        assert_eq!(rat_trig::spread([c(1, 1), c(2, 1)], [c(3, 1), c(4, 1)]), c(4, 125));
        assert_eq!(rat_trig::archimedes(c(1, 2), c(1, 4), c(1, 6)), c(23, 144));
        assert_eq!(rat_trig::quad([c(i64::MAX, 1), c(1, 1)]), Checked(None));
        assert_eq!(rat_trig::archimedes(c(1 << 40, 1), c(1, 1), c(1, 1)), Checked(None));
    }

    #[test]
    fn zero_denominator_raises_zero_division() {
        assert!(raises::<PyZeroDivisionError, _>(frac_from_py((3, 0))));
        assert!(raises::<PyZeroDivisionError, _>(vec_from_py(((1, 1), (1, 0)))));
        assert!(raises::<PyZeroDivisionError, _>(nonzero_divisor(Checked::zero(), "d")));
        assert!(nonzero_divisor(Checked(None), "d").is_ok());
    }

    #[test]
    fn out_of_range_raises_overflow() {
        assert!(raises::<PyOverflowError, _>(frac_from_py((i64::MIN, 1))));
        assert!(raises::<PyOverflowError, _>(frac_from_py((1, i64::MIN))));
        assert!(raises::<PyOverflowError, _>(frac_to_py(Checked(None))));
    }

    #[test]
    fn conversions_reduce_and_normalise_sign() {
        assert_eq!(frac_from_py((2, -4)).unwrap(), c(-1, 2));
        assert_eq!(frac_to_py(c(6, -4)).unwrap(), (-3, 2));
    }
}
