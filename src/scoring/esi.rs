use crate::catalog::types::CelestialRecord;

/// Earth's equilibrium temperature, Kelvin. Reference point for both scores.
pub const EARTH_EQUILIBRIUM_TEMP_K: f64 = 288.0;

const DAYS_PER_YEAR: f64 = 365.25;

/// Earth Similarity Index.
///
/// Exponential falloff around Earth values: radius in Earth radii, orbital
/// distance in AU, temperature in Kelvin. A missing temperature drops that
/// term entirely instead of pulling the score toward zero. Result is clamped
/// to `[0, 1]` and rounded to three decimals; it peaks at `1.0` only for
/// `radius = 1`, `distance = 1`, `temperature = 288` (or absent).
pub fn esi(radius: f64, distance: f64, temperature: Option<f64>) -> f64 {
    let mut score = (-(radius - 1.0).abs()).exp() * (-(distance - 1.0).abs()).exp();
    if let Some(temp) = temperature {
        score *= (-((temp - EARTH_EQUILIBRIUM_TEMP_K) / EARTH_EQUILIBRIUM_TEMP_K).abs()).exp();
    }
    round3(score.clamp(0.0, 1.0))
}

/// Orbital distance proxy from the period alone, in AU.
///
/// Kepler's third law under a solar-mass assumption; the catalog stores no
/// measured semi-major axis. Non-positive periods have no physical orbit.
pub fn orbital_distance_au(period_days: f64) -> Option<f64> {
    if period_days > 0.0 {
        Some((period_days / DAYS_PER_YEAR).powf(2.0 / 3.0))
    } else {
        None
    }
}

pub fn record_distance_au(record: &CelestialRecord) -> Option<f64> {
    record.orbital_period.and_then(orbital_distance_au)
}

/// ESI of a stored record, when computable. Radius and an orbital-distance
/// proxy are mandatory inputs; either missing yields `None`, never a default.
pub fn record_esi(record: &CelestialRecord) -> Option<f64> {
    let radius = record.radius?;
    let distance = record_distance_au(record)?;
    Some(esi(radius, distance, record.equilibrium_temp))
}

pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
