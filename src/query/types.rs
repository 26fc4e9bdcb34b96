use crate::catalog::types::{CelestialRecord, Disposition};
use serde::{Deserialize, Serialize};

/// External shape of a catalog record.
///
/// This is the single projection path out of the service. The field aliases
/// (`orbital_period` -> `period`, `equilibrium_temp` -> `eq_temp`) are part
/// of the API contract: every external name maps to exactly one internal
/// attribute and back. Score annotations are attached per endpoint and
/// omitted from the JSON when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetView {
    pub id: u32,
    pub name: Option<String>,
    pub ra: Option<f64>,
    pub dec: Option<f64>,
    pub disposition: Option<Disposition>,
    #[serde(rename = "period")]
    pub orbital_period: Option<f64>,
    pub radius: Option<f64>,
    #[serde(rename = "eq_temp")]
    pub equilibrium_temp: Option<f64>,
    pub transit_duration: Option<f64>,
    pub transit_depth: Option<f64>,
    pub insolation: Option<f64>,
    pub star_temp: Option<f64>,
    pub star_radius: Option<f64>,
    pub star_logg: Option<f64>,
    pub star_kepmag: Option<f64>,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub esi: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub habitability_score: Option<f64>,
}

impl From<&CelestialRecord> for PlanetView {
    fn from(record: &CelestialRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            ra: record.ra,
            dec: record.dec,
            disposition: record.disposition,
            orbital_period: record.orbital_period,
            radius: record.radius,
            equilibrium_temp: record.equilibrium_temp,
            transit_duration: record.transit_duration,
            transit_depth: record.transit_depth,
            insolation: record.insolation,
            star_temp: record.star_temp,
            star_radius: record.star_radius,
            star_logg: record.star_logg,
            star_kepmag: record.star_kepmag,
            source: record.source.clone(),
            esi: None,
            habitability_score: None,
        }
    }
}

/// List-query envelope: the page plus the match count before pagination.
#[derive(Debug, Serialize, Deserialize)]
pub struct PlanetListResponse {
    pub total_count: usize,
    pub count: usize,
    pub results: Vec<PlanetView>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
