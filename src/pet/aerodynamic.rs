const KELVIN: f64 = 273.15;

fn denominator(slope: f64, psychrometric: f64, wind_speed: f64) -> f64 {
    slope + psychrometric * (1. + 0.34 * wind_speed)
}

/// Weight of the radiation term.
pub fn delta_term(slope: f64, psychrometric: f64, wind_speed: f64) -> f64 {
    slope / denominator(slope, psychrometric, wind_speed)
}

/// Weight of the wind term.
pub fn psi_term(slope: f64, psychrometric: f64, wind_speed: f64) -> f64 {
    psychrometric / denominator(slope, psychrometric, wind_speed)
}

pub fn temperature_term(mean_temp: f64, wind_speed: f64) -> f64 {
    900. / (mean_temp + KELVIN) * wind_speed
}
