pub mod config;
pub mod forecast;
pub mod pet;
pub mod units;
#[cfg(feature = "python")]
mod utils;

pub use config::{ConfigError, SiteConfig};
pub use pet::penman_monteith::{compute_eto, EToInput};

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule]
fn eto_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    use utils::register_submodule;

    let py = m.py();

    register_submodule(py, m, &pet::make_module(py)?, "eto_rs")?;
    register_submodule(py, m, &units::make_module(py)?, "eto_rs")?;

    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}

#[cfg(feature = "python")]
pyo3_stub_gen::define_stub_info_gatherer!(stub_info);
