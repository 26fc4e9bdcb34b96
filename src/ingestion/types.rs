//! Ingestion Data Types
//!
//! Request and response shapes for the ingestion endpoints: manual record
//! creation and remote catalog import.

use crate::catalog::types::{Disposition, NewRecord};
use crate::query::types::PlanetView;
use serde::{Deserialize, Serialize};

/// Payload for creating a single catalog record by hand.
///
/// Field names follow the external API shape (`period`, `eq_temp`) rather
/// than the stored record's internal names.
#[derive(Debug, Default, Deserialize)]
pub struct CreatePlanetRequest {
    pub name: Option<String>,
    pub ra: Option<f64>,
    pub dec: Option<f64>,
    pub disposition: Option<String>,
    pub period: Option<f64>,
    pub radius: Option<f64>,
    pub eq_temp: Option<f64>,
    pub transit_duration: Option<f64>,
    pub transit_depth: Option<f64>,
    pub insolation: Option<f64>,
    pub star_temp: Option<f64>,
    pub star_radius: Option<f64>,
    pub star_logg: Option<f64>,
    pub star_kepmag: Option<f64>,
    pub source: Option<String>,
}

impl CreatePlanetRequest {
    /// Validates the payload and converts it to a storable record.
    ///
    /// Unlike the lenient CSV loader, hand-written payloads are rejected
    /// outright on a nonpositive radius or an unknown disposition tag.
    pub fn into_record(self) -> Result<NewRecord, String> {
        if let Some(radius) = self.radius
            && radius <= 0.0
        {
            return Err("radius must be positive".to_string());
        }

        let disposition = match self.disposition.as_deref() {
            Some(tag) => match Disposition::parse(tag) {
                Some(parsed) => Some(parsed),
                None => return Err(format!("unknown disposition: {}", tag)),
            },
            None => None,
        };

        Ok(NewRecord {
            name: self.name,
            ra: self.ra,
            dec: self.dec,
            disposition,
            orbital_period: self.period,
            radius: self.radius,
            equilibrium_temp: self.eq_temp,
            transit_duration: self.transit_duration,
            transit_depth: self.transit_depth,
            insolation: self.insolation,
            star_temp: self.star_temp,
            star_radius: self.star_radius,
            star_logg: self.star_logg,
            star_kepmag: self.star_kepmag,
            source: self.source,
        })
    }
}

/// Response returned after a record is created.
#[derive(Debug, Serialize)]
pub struct CreatePlanetResponse {
    pub id: u32,
    pub planet: PlanetView,
}

/// Payload for the remote catalog import endpoint.
#[derive(Debug, Deserialize)]
pub struct RemoteIngestRequest {
    pub url: String,
}

/// Outcome of a remote catalog import.
///
/// Indicates whether the download and import succeeded, with the loader's
/// row counts when they did.
#[derive(Debug, Serialize)]
pub struct RemoteIngestResponse {
    pub status: String,
    pub imported: usize,
    pub skipped: usize,
    pub source_url: String,
}
