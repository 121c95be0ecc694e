use std::f64::consts::PI;

pub const MPH_TO_MS: f64 = 0.477;
pub const MM_PER_INCH: f64 = 25.4;
// watts/m^2 averaged over a day -> MJ/m^2/day
pub const W_TO_MJ_DAY: f64 = 0.0864;

pub fn f_to_c(f: f64) -> f64 {
    (f - 32.) / 1.8
}

pub fn c_to_f(c: f64) -> f64 {
    c * 1.8 + 32.
}

pub fn ft_to_m(ft: f64) -> f64 {
    ft * 0.3048
}

pub fn m_to_ft(m: f64) -> f64 {
    m / 0.3048
}

pub fn w_to_mj(watt: f64) -> f64 {
    watt * W_TO_MJ_DAY
}

pub fn mph_to_ms(mph: f64) -> f64 {
    mph * MPH_TO_MS
}

pub fn ms_to_mph(ms: f64) -> f64 {
    ms / MPH_TO_MS
}

pub fn kph_to_ms(kph: f64) -> f64 {
    kph / 3.6
}

pub fn ms_to_kph(ms: f64) -> f64 {
    ms * 3.6
}

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180. / PI
}

pub fn mm_to_inch(mm: f64) -> f64 {
    mm / MM_PER_INCH
}

pub fn inch_to_mm(inch: f64) -> f64 {
    inch * MM_PER_INCH
}

#[cfg(feature = "python")]
pub use python::make_module;

#[cfg(feature = "python")]
mod python {
    use pyo3::prelude::*;
    use pyo3_stub_gen::derive::gen_stub_pyfunction;

    #[gen_stub_pyfunction(module = "eto_rs.units")]
    #[pyfunction]
    #[pyo3(name = "f_to_c")]
    pub fn py_f_to_c(f: f64) -> f64 {
        super::f_to_c(f)
    }

    #[gen_stub_pyfunction(module = "eto_rs.units")]
    #[pyfunction]
    #[pyo3(name = "c_to_f")]
    pub fn py_c_to_f(c: f64) -> f64 {
        super::c_to_f(c)
    }

    #[gen_stub_pyfunction(module = "eto_rs.units")]
    #[pyfunction]
    #[pyo3(name = "ft_to_m")]
    pub fn py_ft_to_m(ft: f64) -> f64 {
        super::ft_to_m(ft)
    }

    #[gen_stub_pyfunction(module = "eto_rs.units")]
    #[pyfunction]
    #[pyo3(name = "mph_to_ms")]
    pub fn py_mph_to_ms(mph: f64) -> f64 {
        super::mph_to_ms(mph)
    }

    #[gen_stub_pyfunction(module = "eto_rs.units")]
    #[pyfunction]
    #[pyo3(name = "kph_to_ms")]
    pub fn py_kph_to_ms(kph: f64) -> f64 {
        super::kph_to_ms(kph)
    }

    #[gen_stub_pyfunction(module = "eto_rs.units")]
    #[pyfunction]
    #[pyo3(name = "mm_to_inch")]
    pub fn py_mm_to_inch(mm: f64) -> f64 {
        super::mm_to_inch(mm)
    }

    pub fn make_module(py: Python<'_>) -> PyResult<Bound<'_, PyModule>> {
        let m = PyModule::new(py, "units")?;
        m.add_function(wrap_pyfunction!(py_f_to_c, &m)?)?;
        m.add_function(wrap_pyfunction!(py_c_to_f, &m)?)?;
        m.add_function(wrap_pyfunction!(py_ft_to_m, &m)?)?;
        m.add_function(wrap_pyfunction!(py_mph_to_ms, &m)?)?;
        m.add_function(wrap_pyfunction!(py_kph_to_ms, &m)?)?;
        m.add_function(wrap_pyfunction!(py_mm_to_inch, &m)?)?;
        Ok(m)
    }
}
