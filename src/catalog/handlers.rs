use super::store::{RecordStore, StoreError};
use super::types::{CelestialRecord, Disposition};
use crate::query::types::{ErrorResponse, PlanetView};
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Counts per survey vetting label. `unset` covers records whose source row
/// carried no recognizable disposition.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct DispositionCounts {
    pub confirmed: usize,
    pub candidate: usize,
    pub false_positive: usize,
    pub unset: usize,
}

/// Aggregate catalog figures for the stats endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct CatalogStats {
    pub total: usize,
    pub dispositions: DispositionCounts,
    pub with_coordinates: usize,
    pub with_radius: usize,
    pub radius_min: Option<f64>,
    pub radius_max: Option<f64>,
    pub radius_mean: Option<f64>,
    pub potentially_habitable: usize,
}

/// Full catalog dump in the external shape. Serves bulk consumers that want
/// the whole table rather than a filtered page.
pub async fn handle_export_catalog(
    Extension(store): Extension<Arc<dyn RecordStore>>,
) -> Result<Json<Vec<PlanetView>>, (StatusCode, Json<ErrorResponse>)> {
    let records = store.all().map_err(store_failure)?;
    let views: Vec<PlanetView> = records.iter().map(PlanetView::from).collect();
    tracing::debug!("Exporting full catalog: {} records", views.len());
    Ok(Json(views))
}

pub async fn handle_catalog_stats(
    Extension(store): Extension<Arc<dyn RecordStore>>,
) -> Result<Json<CatalogStats>, (StatusCode, Json<ErrorResponse>)> {
    let records = store.all().map_err(store_failure)?;
    Ok(Json(compute_stats(&records)))
}

pub fn compute_stats(records: &[CelestialRecord]) -> CatalogStats {
    let mut dispositions = DispositionCounts::default();
    let mut with_coordinates = 0;
    let mut with_radius = 0;
    let mut radius_sum = 0.0;
    let mut radius_min: Option<f64> = None;
    let mut radius_max: Option<f64> = None;
    let mut potentially_habitable = 0;

    for record in records {
        match record.disposition {
            Some(Disposition::Confirmed) => dispositions.confirmed += 1,
            Some(Disposition::Candidate) => dispositions.candidate += 1,
            Some(Disposition::FalsePositive) => dispositions.false_positive += 1,
            None => dispositions.unset += 1,
        }
        if record.ra.is_some() && record.dec.is_some() {
            with_coordinates += 1;
        }
        if let Some(radius) = record.radius {
            with_radius += 1;
            radius_sum += radius;
            radius_min = Some(radius_min.map_or(radius, |min| min.min(radius)));
            radius_max = Some(radius_max.map_or(radius, |max| max.max(radius)));
        }
        if is_potentially_habitable(record) {
            potentially_habitable += 1;
        }
    }

    CatalogStats {
        total: records.len(),
        dispositions,
        with_coordinates,
        with_radius,
        radius_min,
        radius_max,
        radius_mean: (with_radius > 0).then(|| radius_sum / with_radius as f64),
        potentially_habitable,
    }
}

/// Confirmed candidates whose radius and equilibrium temperature both fall in
/// the conservative habitable band (0.5-3.0 Earth radii, 273-320 K).
fn is_potentially_habitable(record: &CelestialRecord) -> bool {
    record.disposition == Some(Disposition::Confirmed)
        && record.radius.is_some_and(|r| (0.5..=3.0).contains(&r))
        && record
            .equilibrium_temp
            .is_some_and(|t| (273.0..=320.0).contains(&t))
}

fn store_failure(err: StoreError) -> (StatusCode, Json<ErrorResponse>) {
    tracing::error!("Record store failure: {}", err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}
