//! `f64` bindings. Division by zero follows IEEE semantics (inf / NaN).

use pyo3::prelude::*;

type V2 = (f64, f64);

#[pyfunction]
pub fn quad(v: V2) -> f64 {
    rat_trig::quad([v.0, v.1])
}

#[pyfunction]
pub fn dot(v_1: V2, v_2: V2) -> f64 {
    rat_trig::dot([v_1.0, v_1.1], [v_2.0, v_2.1])
}

#[pyfunction]
pub fn cross(v_1: V2, v_2: V2) -> f64 {
    rat_trig::cross([v_1.0, v_1.1], [v_2.0, v_2.1])
}

#[pyfunction]
pub fn spread(v_1: V2, v_2: V2) -> f64 {
    rat_trig::spread([v_1.0, v_1.1], [v_2.0, v_2.1])
}

#[pyfunction]
pub fn archimedes(q_1: f64, q_2: f64, q_3: f64) -> f64 {
    rat_trig::archimedes(q_1, q_2, q_3)
}

#[pyfunction]
pub fn spread_law(q_1: f64, q_2: f64, q_3: f64) -> f64 {
    rat_trig::spread_law(q_1, q_2, q_3)
}

#[pyfunction]
pub fn triple_quad_formula(q_1: f64, q_2: f64, s_3: f64) -> f64 {
    rat_trig::triple_quad_formula(q_1, q_2, s_3)
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(quad, m)?)?;
    m.add_function(wrap_pyfunction!(dot, m)?)?;
    m.add_function(wrap_pyfunction!(cross, m)?)?;
    m.add_function(wrap_pyfunction!(spread, m)?)?;
    m.add_function(wrap_pyfunction!(archimedes, m)?)?;
    m.add_function(wrap_pyfunction!(spread_law, m)?)?;
    m.add_function(wrap_pyfunction!(triple_quad_formula, m)?)?;
    Ok(())
}
