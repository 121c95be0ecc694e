//! FAO-56 Penman-Monteith reference evapotranspiration.
//!
//! Step by step calculation following "Step by Step Calculation of the
//! Penman-Monteith Evapotranspiration (FAO-56 Method)", Zotarelli et al.,
//! University of Florida IFAS publication AE459.

use log::debug;
use ndarray::{Array1, Zip};

use super::aerodynamic::{delta_term, psi_term, temperature_term};
use super::atmosphere::{
    actual_vapor_pressure, atmospheric_pressure,
    mean_saturation_vapor_pressure, psychrometric_constant,
    slope_of_saturation_curve, vapor_pressure_deficit,
};
use super::radiation::{
    clear_sky_radiation, earth_sun_distance_factor,
    extraterrestrial_radiation, net_longwave_radiation, net_radiation,
    net_radiation_mm, net_shortwave_radiation, solar_declination,
    solar_radiation, sunset_hour_angle, SolarRadiationSource,
};
use super::PetError;
use crate::units::deg_to_rad;

/// Daily weather and site values for one ETo evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EToInput {
    pub temp_max: f64,                // °C
    pub temp_min: f64,                // °C
    pub solar_radiation: Option<f64>, // W/m^2, estimated when missing
    pub wind_speed: f64,              // m/s
    pub elevation: f64,               // m
    pub humidity_max: f64,            // %
    pub humidity_min: f64,            // %
    pub latitude: f64,                // degrees
    pub canopy_coefficient: f64,
    pub day_of_year: u32,
    /// Overrides the `(temp_max + temp_min) / 2` mean when set.
    pub mean_temp: Option<f64>,
}

impl EToInput {
    pub fn mean_temp(&self) -> f64 {
        self.mean_temp
            .unwrap_or((self.temp_max + self.temp_min) / 2.)
    }
}

/// Intermediate quantities of one ETo evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EToComponents {
    pub mean_temp: f64,
    pub slope: f64,
    pub pressure: f64,
    pub psychrometric: f64,
    pub mean_saturation_vapor_pressure: f64,
    pub actual_vapor_pressure: f64,
    pub vapor_pressure_deficit: f64,
    pub extraterrestrial_radiation: f64,
    pub clear_sky_radiation: f64,
    pub solar_radiation: f64,
    pub solar_radiation_source: SolarRadiationSource,
    pub net_shortwave: f64,
    pub net_longwave: f64,
    pub net_radiation: f64,
    pub radiation_term: f64,
    pub wind_term: f64,
    pub eto: f64, // mm/day
}

pub fn compute_components(input: &EToInput) -> EToComponents {
    let EToInput {
        temp_max,
        temp_min,
        wind_speed,
        elevation,
        humidity_max,
        humidity_min,
        canopy_coefficient,
        day_of_year,
        ..
    } = *input;

    let mean_temp = input.mean_temp();
    let slope = slope_of_saturation_curve(mean_temp);
    let pressure = atmospheric_pressure(elevation);
    let psychrometric = psychrometric_constant(pressure);

    let delta = delta_term(slope, psychrometric, wind_speed);
    let psi = psi_term(slope, psychrometric, wind_speed);
    let t_term = temperature_term(mean_temp, wind_speed);

    let es = mean_saturation_vapor_pressure(temp_min, temp_max);
    let ea =
        actual_vapor_pressure(temp_min, temp_max, humidity_min, humidity_max);
    let deficit = vapor_pressure_deficit(es, ea);

    let lat_rad = deg_to_rad(input.latitude);
    let dr = earth_sun_distance_factor(day_of_year);
    let declination = solar_declination(day_of_year);
    let omega = sunset_hour_angle(lat_rad, declination);
    let ra = extraterrestrial_radiation(dr, omega, lat_rad, declination);
    let rso = clear_sky_radiation(elevation, ra);
    let (rs, source) =
        solar_radiation(input.solar_radiation, temp_min, temp_max, ra);

    let rns = net_shortwave_radiation(rs, canopy_coefficient);
    let rnl = net_longwave_radiation(temp_min, temp_max, ea, rs, rso);
    let rn = net_radiation(rns, rnl);

    let radiation_term = delta * net_radiation_mm(rn);
    let wind_term = psi * t_term * deficit;

    debug!(
        "day {day_of_year}: Ra={ra:.3} Rso={rso:.3} Rs={rs:.3} ({source:?})"
    );
    debug!("day {day_of_year}: Rn={rn:.3} ea={ea:.3} es={es:.3}");

    EToComponents {
        mean_temp,
        slope,
        pressure,
        psychrometric,
        mean_saturation_vapor_pressure: es,
        actual_vapor_pressure: ea,
        vapor_pressure_deficit: deficit,
        extraterrestrial_radiation: ra,
        clear_sky_radiation: rso,
        solar_radiation: rs,
        solar_radiation_source: source,
        net_shortwave: rns,
        net_longwave: rnl,
        net_radiation: rn,
        radiation_term,
        wind_term,
        eto: radiation_term + wind_term,
    }
}

/// Reference evapotranspiration (mm/day).
///
/// Invalid inputs are not checked and come out as NaN or infinite values.
pub fn compute_eto(input: &EToInput) -> f64 {
    compute_components(input).eto
}

/// Values that stay constant over a simulated period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Site {
    pub elevation: f64,
    pub latitude: f64,
    pub canopy_coefficient: f64,
}

/// Daily series fed to [`simulate`]. A NaN solar radiation marks a day
/// without measurement.
#[derive(Debug, Clone)]
pub struct Forcing {
    pub temp_max: Array1<f64>,
    pub temp_min: Array1<f64>,
    pub humidity_max: Array1<f64>,
    pub humidity_min: Array1<f64>,
    pub wind_speed: Array1<f64>,
    pub day_of_year: Array1<u32>,
    pub solar_radiation: Option<Array1<f64>>,
}

impl Forcing {
    pub fn new(
        temp_max: Array1<f64>,
        temp_min: Array1<f64>,
        humidity_max: Array1<f64>,
        humidity_min: Array1<f64>,
        wind_speed: Array1<f64>,
        day_of_year: Array1<u32>,
        solar_radiation: Option<Array1<f64>>,
    ) -> Result<Self, PetError> {
        let n = temp_max.len();
        let lengths = [
            ("temp_min", temp_min.len()),
            ("humidity_max", humidity_max.len()),
            ("humidity_min", humidity_min.len()),
            ("wind_speed", wind_speed.len()),
            ("day_of_year", day_of_year.len()),
            (
                "solar_radiation",
                solar_radiation.as_ref().map_or(n, |s| s.len()),
            ),
        ];
        if let Some((field, len)) = lengths.iter().find(|(_, len)| *len != n) {
            return Err(PetError::LengthMismatch(*field, *len, n));
        }

        Ok(Forcing {
            temp_max,
            temp_min,
            humidity_max,
            humidity_min,
            wind_speed,
            day_of_year,
            solar_radiation,
        })
    }

    pub fn len(&self) -> usize {
        self.temp_max.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn input(&self, t: usize, site: &Site) -> EToInput {
        EToInput {
            temp_max: self.temp_max[t],
            temp_min: self.temp_min[t],
            solar_radiation: self
                .solar_radiation
                .as_ref()
                .map(|s| s[t])
                .filter(|s| !s.is_nan()),
            wind_speed: self.wind_speed[t],
            elevation: site.elevation,
            humidity_max: self.humidity_max[t],
            humidity_min: self.humidity_min[t],
            latitude: site.latitude,
            canopy_coefficient: site.canopy_coefficient,
            day_of_year: self.day_of_year[t],
            mean_temp: None,
        }
    }
}

/// Daily ETo (mm/day) over a forcing series.
pub fn simulate(forcing: &Forcing, site: &Site) -> Array1<f64> {
    let mut eto = Array1::zeros(forcing.len());
    Zip::indexed(&mut eto)
        .for_each(|t, e| *e = compute_eto(&forcing.input(t, site)));
    eto
}

#[cfg(feature = "python")]
pub use python::make_module;

#[cfg(feature = "python")]
mod python {
    use numpy::{PyArray1, PyReadonlyArray1, ToPyArray};
    use pyo3::prelude::*;
    use pyo3_stub_gen::derive::gen_stub_pyfunction;

    use super::{EToInput, Forcing, Site};

    #[allow(clippy::too_many_arguments)]
    #[gen_stub_pyfunction(module = "eto_rs.pet.penman_monteith")]
    #[pyfunction]
    #[pyo3(
        name = "compute_eto",
        signature = (
            temp_max, temp_min, solar_radiation, wind_speed, elevation,
            humidity_max, humidity_min, latitude, canopy_coefficient,
            day_of_year, mean_temp=None
        )
    )]
    pub fn py_compute_eto(
        temp_max: f64,
        temp_min: f64,
        solar_radiation: Option<f64>,
        wind_speed: f64,
        elevation: f64,
        humidity_max: f64,
        humidity_min: f64,
        latitude: f64,
        canopy_coefficient: f64,
        day_of_year: u32,
        mean_temp: Option<f64>,
    ) -> f64 {
        super::compute_eto(&EToInput {
            temp_max,
            temp_min,
            solar_radiation,
            wind_speed,
            elevation,
            humidity_max,
            humidity_min,
            latitude,
            canopy_coefficient,
            day_of_year,
            mean_temp,
        })
    }

    #[allow(clippy::too_many_arguments)]
    #[gen_stub_pyfunction(module = "eto_rs.pet.penman_monteith")]
    #[pyfunction]
    #[pyo3(
        name = "simulate",
        signature = (
            temp_max, temp_min, humidity_max, humidity_min, wind_speed,
            day_of_year, elevation, latitude, canopy_coefficient=0.23,
            solar_radiation=None
        )
    )]
    pub fn py_simulate<'py>(
        py: Python<'py>,
        temp_max: PyReadonlyArray1<'py, f64>,
        temp_min: PyReadonlyArray1<'py, f64>,
        humidity_max: PyReadonlyArray1<'py, f64>,
        humidity_min: PyReadonlyArray1<'py, f64>,
        wind_speed: PyReadonlyArray1<'py, f64>,
        day_of_year: PyReadonlyArray1<'py, u32>,
        elevation: f64,
        latitude: f64,
        canopy_coefficient: f64,
        solar_radiation: Option<PyReadonlyArray1<'py, f64>>,
    ) -> PyResult<Bound<'py, PyArray1<f64>>> {
        let forcing = Forcing::new(
            temp_max.as_array().to_owned(),
            temp_min.as_array().to_owned(),
            humidity_max.as_array().to_owned(),
            humidity_min.as_array().to_owned(),
            wind_speed.as_array().to_owned(),
            day_of_year.as_array().to_owned(),
            solar_radiation.map(|s| s.as_array().to_owned()),
        )?;
        let site = Site {
            elevation,
            latitude,
            canopy_coefficient,
        };
        Ok(super::simulate(&forcing, &site).to_pyarray(py))
    }

    pub fn make_module(py: Python<'_>) -> PyResult<Bound<'_, PyModule>> {
        let m = PyModule::new(py, "penman_monteith")?;
        m.add_function(wrap_pyfunction!(py_compute_eto, &m)?)?;
        m.add_function(wrap_pyfunction!(py_simulate, &m)?)?;
        Ok(m)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn solar_radiation_is_the_third_argument() {
            let estimated = py_compute_eto(
                27.3, 10.7, None, 1.3, 401.33, 91., 36., 36.82, 0.23, 289, None,
            );
            assert!((estimated - 3.0486611876003247).abs() < 1e-9);
            let measured = py_compute_eto(
                27.3,
                10.7,
                Some(250.),
                1.3,
                401.33,
                91.,
                36.,
                36.82,
                0.23,
                289,
                None,
            );
            assert!((measured - 3.389069882075555).abs() < 1e-9);
        }
    }
}
