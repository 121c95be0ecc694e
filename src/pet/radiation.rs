//! Astronomical and radiation quantities. Radiations are in MJ m^-2 day^-1.

use std::f64::consts::PI;

use crate::units::w_to_mj;

pub const SOLAR_CONSTANT: f64 = 0.0820; // MJ m^-2 min^-1
const STEFAN_BOLTZMANN: f64 = 4.903e-9; // MJ K^-4 m^-2 day^-1
const KELVIN: f64 = 273.15;
const HARGREAVES_COEFFICIENT: f64 = 0.17;

/// Inverse relative distance Earth-Sun.
pub fn earth_sun_distance_factor(day_of_year: u32) -> f64 {
    1. + 0.033 * (2. * PI / 365. * day_of_year as f64).cos()
}

/// Solar declination (rad).
pub fn solar_declination(day_of_year: u32) -> f64 {
    0.409 * (2. * PI / 365. * day_of_year as f64 - 1.39).sin()
}

/// Sunset hour angle (rad).
///
/// The acos argument is clamped to [-1, 1] so polar days give `PI` and
/// polar nights give `0`.
pub fn sunset_hour_angle(latitude: f64, declination: f64) -> f64 {
    (-latitude.tan() * declination.tan()).clamp(-1., 1.).acos()
}

pub fn extraterrestrial_radiation(
    distance_factor: f64,
    hour_angle: f64,
    latitude: f64,
    declination: f64,
) -> f64 {
    24. * 60. / PI
        * SOLAR_CONSTANT
        * distance_factor
        * (hour_angle * latitude.sin() * declination.sin()
            + latitude.cos() * declination.cos() * hour_angle.sin())
}

pub fn clear_sky_radiation(elevation: f64, extraterrestrial: f64) -> f64 {
    (0.75 + 2e-5 * elevation) * extraterrestrial
}

/// Hargreaves estimate of the incoming solar radiation from the daily
/// temperature range.
pub fn estimated_solar_radiation(
    temp_min: f64,
    temp_max: f64,
    extraterrestrial: f64,
) -> f64 {
    HARGREAVES_COEFFICIENT * (temp_max - temp_min).sqrt() * extraterrestrial
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolarRadiationSource {
    Measured,
    Estimated,
}

/// Incoming solar radiation, from the measured value in W/m^2 when there is
/// one, otherwise estimated.
pub fn solar_radiation(
    measured: Option<f64>,
    temp_min: f64,
    temp_max: f64,
    extraterrestrial: f64,
) -> (f64, SolarRadiationSource) {
    match measured {
        Some(watts) => (w_to_mj(watts), SolarRadiationSource::Measured),
        None => (
            estimated_solar_radiation(temp_min, temp_max, extraterrestrial),
            SolarRadiationSource::Estimated,
        ),
    }
}

pub fn net_shortwave_radiation(solar: f64, canopy_coefficient: f64) -> f64 {
    (1. - canopy_coefficient) * solar
}

/// Net outgoing longwave radiation.
///
/// Without clear-sky radiation (polar night) the relative shortwave
/// radiation Rs/Rso is taken as 1.
pub fn net_longwave_radiation(
    temp_min: f64,
    temp_max: f64,
    actual_vapor_pressure: f64,
    solar: f64,
    clear_sky: f64,
) -> f64 {
    let mean_t4 =
        ((temp_max + KELVIN).powi(4) + (temp_min + KELVIN).powi(4)) / 2.;
    let relative_shortwave = if clear_sky <= 0. {
        1.
    } else {
        solar / clear_sky
    };
    STEFAN_BOLTZMANN
        * mean_t4
        * (0.34 - 0.14 * actual_vapor_pressure.sqrt())
        * (1.35 * relative_shortwave - 0.35)
}

pub fn net_radiation(net_shortwave: f64, net_longwave: f64) -> f64 {
    net_shortwave - net_longwave
}

/// Net radiation expressed as equivalent evaporation (mm/day).
pub fn net_radiation_mm(net_radiation: f64) -> f64 {
    net_radiation * 0.408
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::deg_to_rad;

    fn assert_close(a: f64, b: f64, tol: f64) {
        assert!((a - b).abs() <= tol, "{a} != {b} (tol {tol})");
    }

    #[test]
    fn extraterrestrial_radiation_southern_hemisphere() {
        let lat = deg_to_rad(-22.9);
        let dr = earth_sun_distance_factor(246);
        let decl = solar_declination(246);
        let omega = sunset_hour_angle(lat, decl);
        assert_close(dr, 0.9848288195980806, 1e-12);
        assert_close(decl, 0.11965509269706703, 1e-12);
        assert_close(omega, 1.5199875693977642, 1e-12);
        assert_close(
            extraterrestrial_radiation(dr, omega, lat, decl),
            31.197501605399335,
            1e-9,
        );
    }

    #[test]
    fn hour_angle_is_clamped_at_the_poles() {
        let summer = solar_declination(172);
        assert_close(sunset_hour_angle(deg_to_rad(89.), summer), PI, 1e-12);
        assert_eq!(sunset_hour_angle(deg_to_rad(-89.), summer), 0.);
        let ra = extraterrestrial_radiation(
            earth_sun_distance_factor(172),
            0.,
            deg_to_rad(-89.),
            summer,
        );
        assert_eq!(ra, 0.);

        let winter = solar_declination(355);
        assert_eq!(sunset_hour_angle(deg_to_rad(89.), winter), 0.);
        assert_close(sunset_hour_angle(deg_to_rad(-89.), winter), PI, 1e-12);
    }

    #[test]
    fn longwave_without_clear_sky_radiation() {
        let ea = 1.238621316393445;
        let rnl = net_longwave_radiation(10.7, 27.3, ea, 0., 0.);
        let clear = net_longwave_radiation(10.7, 27.3, ea, 18., 18.);
        assert!(rnl.is_finite());
        assert_eq!(rnl, clear);
        let rnl = net_longwave_radiation(10.7, 27.3, ea, 0., f64::NAN);
        assert!(rnl.is_nan());
    }

    #[test]
    fn measured_radiation_is_converted() {
        let (rs, source) = solar_radiation(Some(250.), 10.7, 27.3, 23.9);
        assert_eq!(source, SolarRadiationSource::Measured);
        assert_close(rs, 21.6, 1e-12);
    }

    #[test]
    fn missing_radiation_is_estimated() {
        let ra = 23.91536064783146;
        let (rs, source) = solar_radiation(None, 10.7, 27.3, ra);
        assert_eq!(source, SolarRadiationSource::Estimated);
        assert_close(rs, 16.56455983104072, 1e-9);
        assert!(solar_radiation(None, 5., 30., ra).0 > rs);
    }

    #[test]
    fn net_radiation_balance() {
        let rso = clear_sky_radiation(401.33, 23.91536064783146);
        assert_close(rso, 18.128479519649478, 1e-9);
        let rns = net_shortwave_radiation(16.56455983104072, 0.23);
        let rnl = net_longwave_radiation(
            10.7,
            27.3,
            1.238621316393445,
            16.56455983104072,
            rso,
        );
        let rn = net_radiation(rns, rnl);
        assert_close(rn, 6.91390052169089, 1e-9);
        assert_close(net_radiation_mm(rn), rn * 0.408, 1e-15);
    }
}
