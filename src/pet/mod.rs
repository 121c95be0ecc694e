pub mod aerodynamic;
pub mod atmosphere;
pub mod penman_monteith;
pub mod radiation;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PetError {
    #[error("{0} has {1} values, expected {2} like temp_max")]
    LengthMismatch(&'static str, usize, usize),
}

#[cfg(feature = "python")]
impl From<PetError> for pyo3::PyErr {
    fn from(err: PetError) -> pyo3::PyErr {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}

#[cfg(feature = "python")]
pub fn make_module(
    py: pyo3::Python<'_>,
) -> pyo3::PyResult<pyo3::Bound<'_, pyo3::types::PyModule>> {
    use crate::utils::register_submodule;
    use pyo3::types::PyModule;

    let m = PyModule::new(py, "pet")?;
    register_submodule(
        py,
        &m,
        &penman_monteith::make_module(py)?,
        "eto_rs.pet",
    )?;
    Ok(m)
}
