use crate::design::DesignType;
use crate::error::PrecisionError;
use crate::{effect, grid, guard, interval};
use pyo3::prelude::*;
use pyo3::types::PyDict;

impl From<PrecisionError> for PyErr {
    fn from(err: PrecisionError) -> PyErr {
        PyErr::new::<pyo3::exceptions::PyValueError, _>(err.to_string())
    }
}

fn design_from_args(within_subjects: bool, rho: f64) -> DesignType {
    if within_subjects {
        DesignType::Paired { rho }
    } else {
        DesignType::Independent
    }
}

#[pymodule]
fn rustyprecision_utils(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(validate_number, m)?)?;
    m.add_function(wrap_pyfunction!(credible_interval, m)?)?;
    m.add_function(wrap_pyfunction!(detectable_difference, m)?)?;
    m.add_function(wrap_pyfunction!(directional_difference, m)?)?;
    m.add_function(wrap_pyfunction!(sample_sizes, m)?)?;
    Ok(())
}

#[pyfunction]
fn validate_number(value: f64, min: f64, max: f64, fallback: f64) -> f64 {
    guard::validate_value(value, min, max, fallback)
}

/// Returns a dict with `lower`, `upper` and `half_width` in percent.
#[pyfunction]
fn credible_interval(py: Python<'_>, n: u32, p: f64) -> PyResult<Py<PyDict>> {
    let ci = interval::credible_interval(n, p)?;
    let dict = PyDict::new(py);
    dict.set_item("lower", ci.lower)?;
    dict.set_item("upper", ci.upper)?;
    dict.set_item("half_width", ci.half_width)?;
    Ok(dict.into())
}

#[pyfunction]
#[pyo3(signature = (n, baseline_rate, within_subjects = false, rho = 0.5))]
fn detectable_difference(n: u32, baseline_rate: f64, within_subjects: bool, rho: f64) -> PyResult<f64> {
    let design = design_from_args(within_subjects, rho);
    Ok(effect::minimum_detectable_difference(n, baseline_rate, design)?)
}

#[pyfunction]
#[pyo3(signature = (n, baseline_rate, confidence_level = 0.95, within_subjects = false))]
fn directional_difference(
    n: u32,
    baseline_rate: f64,
    confidence_level: f64,
    within_subjects: bool,
) -> PyResult<f64> {
    let design = design_from_args(within_subjects, crate::design::DEFAULT_RHO);
    Ok(effect::minimum_directional_difference(
        n,
        baseline_rate,
        confidence_level,
        design,
    )?)
}

#[pyfunction]
fn sample_sizes(min_size: f64, max_size: f64, use_log_scale: bool) -> Vec<u32> {
    grid::generate_sample_sizes(min_size, max_size, use_log_scale)
}
