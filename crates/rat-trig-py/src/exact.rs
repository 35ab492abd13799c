//! Exact bindings over `Ratio<i64>`.
//!
//! Inputs and outputs are `(numerator, denominator)` tuples; results come back
//! reduced with a positive denominator. Arithmetic is checked: a result or
//! intermediate that leaves `i64` raises `OverflowError`.

use crate::common::{frac_from_py, frac_to_py, nonzero_divisor, vec_from_py, PyFrac};
use pyo3::prelude::*;

type V2 = (PyFrac, PyFrac);

#[pyfunction]
pub fn quad_exact(v: V2) -> PyResult<PyFrac> {
    frac_to_py(rat_trig::quad(vec_from_py(v)?))
}

#[pyfunction]
pub fn dot_exact(v_1: V2, v_2: V2) -> PyResult<PyFrac> {
    frac_to_py(rat_trig::dot(vec_from_py(v_1)?, vec_from_py(v_2)?))
}

#[pyfunction]
pub fn cross_exact(v_1: V2, v_2: V2) -> PyResult<PyFrac> {
    frac_to_py(rat_trig::cross(vec_from_py(v_1)?, vec_from_py(v_2)?))
}

#[pyfunction]
pub fn spread_exact(v_1: V2, v_2: V2) -> PyResult<PyFrac> {
    let (a, b) = (vec_from_py(v_1)?, vec_from_py(v_2)?);
    nonzero_divisor(rat_trig::quad(a) * rat_trig::quad(b), "product of quadrances")?;
    frac_to_py(rat_trig::spread(a, b))
}

#[pyfunction]
pub fn archimedes_exact(q_1: PyFrac, q_2: PyFrac, q_3: PyFrac) -> PyResult<PyFrac> {
    let (q_1, q_2, q_3) = (frac_from_py(q_1)?, frac_from_py(q_2)?, frac_from_py(q_3)?);
    frac_to_py(rat_trig::archimedes(q_1, q_2, q_3))
}

#[pyfunction]
pub fn spread_law_exact(q_1: PyFrac, q_2: PyFrac, q_3: PyFrac) -> PyResult<PyFrac> {
    let (q_1, q_2, q_3) = (frac_from_py(q_1)?, frac_from_py(q_2)?, frac_from_py(q_3)?);
    nonzero_divisor(q_1 * q_2, "q_1 * q_2")?;
    frac_to_py(rat_trig::spread_law(q_1, q_2, q_3))
}

#[pyfunction]
pub fn triple_quad_formula_exact(q_1: PyFrac, q_2: PyFrac, s_3: PyFrac) -> PyResult<PyFrac> {
    let (q_1, q_2, s_3) = (frac_from_py(q_1)?, frac_from_py(q_2)?, frac_from_py(s_3)?);
    frac_to_py(rat_trig::triple_quad_formula(q_1, q_2, s_3))
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(quad_exact, m)?)?;
    m.add_function(wrap_pyfunction!(dot_exact, m)?)?;
    m.add_function(wrap_pyfunction!(cross_exact, m)?)?;
    m.add_function(wrap_pyfunction!(spread_exact, m)?)?;
    m.add_function(wrap_pyfunction!(archimedes_exact, m)?)?;
    m.add_function(wrap_pyfunction!(spread_law_exact, m)?)?;
    m.add_function(wrap_pyfunction!(triple_quad_formula_exact, m)?)?;
    Ok(())
}
