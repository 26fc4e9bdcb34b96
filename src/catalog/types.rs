use serde::{Deserialize, Serialize};

/// Provenance label applied when a record arrives without one.
pub const DEFAULT_SOURCE: &str = "Kepler";

/// Vetting label assigned by the source survey pipeline.
///
/// Inherited from the ingested data, never computed by this service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Disposition {
    #[serde(rename = "CONFIRMED")]
    Confirmed,
    #[serde(rename = "CANDIDATE")]
    Candidate,
    #[serde(rename = "FALSE POSITIVE")]
    FalsePositive,
}

impl Disposition {
    /// Parses a survey label, tolerating case and surrounding whitespace.
    /// Unknown labels yield `None` rather than an error.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag.trim().to_uppercase().as_str() {
            "CONFIRMED" => Some(Self::Confirmed),
            "CANDIDATE" => Some(Self::Candidate),
            "FALSE POSITIVE" => Some(Self::FalsePositive),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Confirmed => "CONFIRMED",
            Self::Candidate => "CANDIDATE",
            Self::FalsePositive => "FALSE POSITIVE",
        }
    }
}

/// A single exoplanet candidate in the catalog.
///
/// Every physical attribute is independently optional: a missing measurement
/// stays missing (never zero, never a sentinel). Records are immutable once
/// stored; the query and scoring layers only read them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CelestialRecord {
    pub id: u32,
    pub name: Option<String>,
    /// Right ascension, degrees.
    pub ra: Option<f64>,
    /// Declination, degrees.
    pub dec: Option<f64>,
    pub disposition: Option<Disposition>,
    /// Orbital period, days.
    pub orbital_period: Option<f64>,
    /// Planetary radius, Earth radii. Positive whenever present.
    pub radius: Option<f64>,
    /// Equilibrium temperature, Kelvin.
    pub equilibrium_temp: Option<f64>,
    /// Transit duration, hours.
    pub transit_duration: Option<f64>,
    /// Transit depth, parts per million.
    pub transit_depth: Option<f64>,
    /// Insolation flux, Earth flux units.
    pub insolation: Option<f64>,
    /// Host star effective temperature, Kelvin.
    pub star_temp: Option<f64>,
    /// Host star radius, solar radii.
    pub star_radius: Option<f64>,
    /// Host star surface gravity, log10(cm/s^2).
    pub star_logg: Option<f64>,
    /// Host star Kepler-band magnitude.
    pub star_kepmag: Option<f64>,
    pub source: String,
}

/// Insert payload for the record store: a `CelestialRecord` before the store
/// has assigned an id, derived a fallback name, or defaulted the source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewRecord {
    pub name: Option<String>,
    pub ra: Option<f64>,
    pub dec: Option<f64>,
    pub disposition: Option<Disposition>,
    pub orbital_period: Option<f64>,
    pub radius: Option<f64>,
    pub equilibrium_temp: Option<f64>,
    pub transit_duration: Option<f64>,
    pub transit_depth: Option<f64>,
    pub insolation: Option<f64>,
    pub star_temp: Option<f64>,
    pub star_radius: Option<f64>,
    pub star_logg: Option<f64>,
    pub star_kepmag: Option<f64>,
    pub source: Option<String>,
}

/// Deterministic designation for records ingested without a name.
///
/// Coordinates are folded in when both are known so that distinct objects at
/// the same survey index remain distinguishable.
pub fn derive_name(id: u32, ra: Option<f64>, dec: Option<f64>) -> String {
    match (ra, dec) {
        (Some(ra), Some(dec)) => format!("KOI-{:05}_RA{:.3}_DEC{:.3}", id, ra, dec),
        _ => format!("KOI-{:05}", id),
    }
}
