//! Psychrometric and atmospheric quantities (FAO-56, chapter 3).

const VAPOR_RATE: f64 = 237.3;
const ENTHALPY: f64 = 17.27;

/// Saturation vapor pressure (kPa) at temperature `t` (°C).
pub fn saturation_vapor_pressure(t: f64) -> f64 {
    0.6108 * (ENTHALPY * t / (t + VAPOR_RATE)).exp()
}

/// Slope of the saturation vapor pressure curve (kPa/°C) at `t` (°C).
pub fn slope_of_saturation_curve(t: f64) -> f64 {
    4098. * saturation_vapor_pressure(t) / (t + VAPOR_RATE).powi(2)
}

/// Atmospheric pressure (kPa) at `elevation` (m).
pub fn atmospheric_pressure(elevation: f64) -> f64 {
    101.3 * ((293. - 0.0065 * elevation) / 293.).powf(5.26)
}

/// Psychrometric constant (kPa/°C) for a pressure in kPa.
pub fn psychrometric_constant(pressure: f64) -> f64 {
    0.000665 * pressure
}

/// Actual vapor pressure (kPa) from daily temperature and humidity extremes.
///
/// The minimum temperature goes with the maximum humidity and the maximum
/// temperature with the minimum humidity.
pub fn actual_vapor_pressure(
    temp_min: f64,
    temp_max: f64,
    humidity_min: f64,
    humidity_max: f64,
) -> f64 {
    let rel_1 = saturation_vapor_pressure(temp_min) * humidity_max / 100.;
    let rel_2 = saturation_vapor_pressure(temp_max) * humidity_min / 100.;
    (rel_1 + rel_2) / 2.
}

pub fn mean_saturation_vapor_pressure(temp_min: f64, temp_max: f64) -> f64 {
    (saturation_vapor_pressure(temp_max) + saturation_vapor_pressure(temp_min))
        / 2.
}

pub fn vapor_pressure_deficit(
    mean_saturation_vapor_pressure: f64,
    actual_vapor_pressure: f64,
) -> f64 {
    mean_saturation_vapor_pressure - actual_vapor_pressure
}
