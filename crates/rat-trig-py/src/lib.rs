//! PyO3 bindings for the `rat-trig` formulas.
//!
//! Notes
//! - Keep bindings thin: float variants take `(x, y)` tuples of `f64`, exact
//!   variants take fractions as `(numerator, denominator)` tuples of `i64`.
//! - Zero denominators raise `ZeroDivisionError` instead of panicking inside
//!   the interpreter.
//! - Exact arithmetic is checked; leaving `i64` raises `OverflowError`.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

mod common;
mod exact;
mod floats;

/// n-th Fibonacci number; `ValueError` for `n == 0` or when it overflows u64.
#[pyfunction]
fn fib(n: u64) -> PyResult<u64> {
    rat_trig::checked_fib(n).ok_or_else(|| {
        PyValueError::new_err(format!(
            "fib(n) is defined for 1 <= n <= {}, got {n}",
            rat_trig::MAX_FIB_INDEX
        ))
    })
}

#[pymodule]
fn rat_trig_native(_py: Python, m: &PyModule) -> PyResult<()> {
    floats::register(m)?;
    exact::register(m)?;
    m.add_function(wrap_pyfunction!(fib, m)?)?;
    m.add("__version__", rat_trig::VERSION)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::raises;

    #[test]
    fn fib_out_of_range_raises_value_error() {
        assert_eq!(fib(10).unwrap(), 55);
        assert!(raises::<PyValueError, _>(fib(0)));
        assert!(raises::<PyValueError, _>(fib(rat_trig::MAX_FIB_INDEX + 1)));
    }
}
