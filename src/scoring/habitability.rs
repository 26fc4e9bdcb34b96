use super::esi::{EARTH_EQUILIBRIUM_TEMP_K, round3};
use crate::catalog::types::CelestialRecord;

/// Heuristic habitability score in `[0, 1]`.
///
/// Deliberately cruder than the ESI: multiplicative penalties for radius and
/// temperature away from Earth values, each floored at 0.1 so one bad
/// attribute cannot zero the score, plus a flat halving for orbital periods
/// outside 1-1000 days. Attributes the record is missing skip their term.
pub fn habitability_score(record: &CelestialRecord) -> f64 {
    let mut score = 1.0;

    if let Some(radius) = record.radius {
        score *= (1.0 - (radius - 1.0).abs() / 2.0).max(0.1);
    }
    if let Some(temp) = record.equilibrium_temp {
        score *= (1.0 - (temp - EARTH_EQUILIBRIUM_TEMP_K).abs() / 200.0).max(0.1);
    }
    if let Some(period) = record.orbital_period
        && !(1.0..=1000.0).contains(&period)
    {
        score *= 0.5;
    }

    round3(score.clamp(0.0, 1.0))
}
