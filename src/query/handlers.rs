use super::engine::{QueryError, QueryOutcome, run_query};
use super::spec::{MAX_PAGE_SIZE, QuerySpec};
use super::types::{ErrorResponse, PlanetListResponse, PlanetView};
use crate::catalog::store::RecordStore;
use crate::catalog::types::CelestialRecord;
use crate::scoring::esi::record_esi;
use crate::scoring::habitability::habitability_score;
use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::Deserialize;
use std::sync::Arc;

const EARTH_RADIUS: f64 = 1.0;
const EARTH_TEMP_K: f64 = 288.0;

type HandlerError = (StatusCode, Json<ErrorResponse>);

#[derive(Deserialize)]
pub struct RadiusBandParams {
    pub min_radius: f64,
    pub max_radius: f64,
}

#[derive(Deserialize)]
pub struct TemperatureBandParams {
    pub min_temp: f64,
    pub max_temp: f64,
}

#[derive(Deserialize)]
pub struct EarthLikeParams {
    pub radius_tolerance: Option<f64>,
    pub temp_tolerance: Option<f64>,
}

#[derive(Deserialize)]
pub struct HabitableZoneParams {
    pub min_radius: Option<f64>,
    pub max_radius: Option<f64>,
    pub min_temp: Option<f64>,
    pub max_temp: Option<f64>,
    pub min_period: Option<f64>,
    pub max_period: Option<f64>,
}

#[derive(Deserialize)]
pub struct SortedParams {
    pub field: String,
    pub ascending: Option<bool>,
    pub limit: Option<i64>,
}

/// The general catalog query: every bound, the text filter, ordering, and
/// pagination straight from the query string.
pub async fn handle_list_planets(
    Query(spec): Query<QuerySpec>,
    Extension(store): Extension<Arc<dyn RecordStore>>,
) -> Result<Json<PlanetListResponse>, HandlerError> {
    let outcome = run_query(store.as_ref(), &spec).map_err(query_failure)?;
    Ok(Json(project_outcome(outcome, |_, _| {})))
}

/// Point lookup, annotated with both scores.
pub async fn handle_get_planet(
    Path(id): Path<u32>,
    Extension(store): Extension<Arc<dyn RecordStore>>,
) -> Result<Json<PlanetView>, HandlerError> {
    let record = store.find_by_id(id).map_err(store_failure)?;
    let Some(record) = record else {
        return Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("planet {} not found", id),
            }),
        ));
    };

    let mut view = PlanetView::from(&record);
    view.esi = record_esi(&record);
    view.habitability_score = Some(habitability_score(&record));
    Ok(Json(view))
}

pub async fn handle_search_by_radius(
    Query(params): Query<RadiusBandParams>,
    Extension(store): Extension<Arc<dyn RecordStore>>,
) -> Result<Json<PlanetListResponse>, HandlerError> {
    let spec = QuerySpec {
        min_radius: Some(params.min_radius),
        max_radius: Some(params.max_radius),
        order_by: Some("radius".to_string()),
        order_dir: Some("asc".to_string()),
        limit: Some(MAX_PAGE_SIZE),
        ..Default::default()
    };

    let outcome = run_query(store.as_ref(), &spec).map_err(query_failure)?;
    Ok(Json(project_outcome(outcome, |_, _| {})))
}

pub async fn handle_search_by_temperature(
    Query(params): Query<TemperatureBandParams>,
    Extension(store): Extension<Arc<dyn RecordStore>>,
) -> Result<Json<PlanetListResponse>, HandlerError> {
    let spec = QuerySpec {
        min_eq_temp: Some(params.min_temp),
        max_eq_temp: Some(params.max_temp),
        order_by: Some("eq_temp".to_string()),
        order_dir: Some("asc".to_string()),
        limit: Some(MAX_PAGE_SIZE),
        ..Default::default()
    };

    let outcome = run_query(store.as_ref(), &spec).map_err(query_failure)?;
    Ok(Json(project_outcome(outcome, |_, _| {})))
}

/// Band around Earth's radius and temperature; each hit carries its ESI so
/// callers can rank within the band.
pub async fn handle_search_earth_like(
    Query(params): Query<EarthLikeParams>,
    Extension(store): Extension<Arc<dyn RecordStore>>,
) -> Result<Json<PlanetListResponse>, HandlerError> {
    let radius_tolerance = params.radius_tolerance.unwrap_or(0.5);
    let temp_tolerance = params.temp_tolerance.unwrap_or(50.0);

    let spec = QuerySpec {
        min_radius: Some(EARTH_RADIUS - radius_tolerance),
        max_radius: Some(EARTH_RADIUS + radius_tolerance),
        min_eq_temp: Some(EARTH_TEMP_K - temp_tolerance),
        max_eq_temp: Some(EARTH_TEMP_K + temp_tolerance),
        order_by: Some("radius".to_string()),
        order_dir: Some("asc".to_string()),
        limit: Some(MAX_PAGE_SIZE),
        ..Default::default()
    };

    let outcome = run_query(store.as_ref(), &spec).map_err(query_failure)?;
    Ok(Json(project_outcome(outcome, |record, view| {
        view.esi = record_esi(record);
    })))
}

/// Conservative habitable-zone cut on radius, temperature, and period; each
/// hit carries its habitability score.
pub async fn handle_search_habitable_zone(
    Query(params): Query<HabitableZoneParams>,
    Extension(store): Extension<Arc<dyn RecordStore>>,
) -> Result<Json<PlanetListResponse>, HandlerError> {
    let spec = QuerySpec {
        min_radius: Some(params.min_radius.unwrap_or(0.5)),
        max_radius: Some(params.max_radius.unwrap_or(2.0)),
        min_eq_temp: Some(params.min_temp.unwrap_or(200.0)),
        max_eq_temp: Some(params.max_temp.unwrap_or(350.0)),
        min_period: Some(params.min_period.unwrap_or(0.1)),
        max_period: Some(params.max_period.unwrap_or(500.0)),
        order_by: Some("radius".to_string()),
        order_dir: Some("asc".to_string()),
        limit: Some(MAX_PAGE_SIZE),
        ..Default::default()
    };

    let outcome = run_query(store.as_ref(), &spec).map_err(query_failure)?;
    Ok(Json(project_outcome(outcome, |record, view| {
        view.habitability_score = Some(habitability_score(record));
    })))
}

/// Whole catalog ordered by one field. Unknown fields are rejected, not
/// ignored.
pub async fn handle_search_sorted(
    Query(params): Query<SortedParams>,
    Extension(store): Extension<Arc<dyn RecordStore>>,
) -> Result<Json<PlanetListResponse>, HandlerError> {
    let direction = if params.ascending.unwrap_or(true) {
        "asc"
    } else {
        "desc"
    };
    let spec = QuerySpec {
        order_by: Some(params.field),
        order_dir: Some(direction.to_string()),
        limit: params.limit,
        ..Default::default()
    };

    let outcome = run_query(store.as_ref(), &spec).map_err(query_failure)?;
    Ok(Json(project_outcome(outcome, |_, _| {})))
}

fn project_outcome<F>(outcome: QueryOutcome, mut annotate: F) -> PlanetListResponse
where
    F: FnMut(&CelestialRecord, &mut PlanetView),
{
    let results: Vec<PlanetView> = outcome
        .records
        .iter()
        .map(|record| {
            let mut view = PlanetView::from(record);
            annotate(record, &mut view);
            view
        })
        .collect();

    PlanetListResponse {
        total_count: outcome.total_matched,
        count: results.len(),
        results,
    }
}

fn query_failure(err: QueryError) -> HandlerError {
    let status = match &err {
        QueryError::InvalidSortField { .. } => StatusCode::BAD_REQUEST,
        QueryError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status.is_server_error() {
        tracing::error!("Query failed: {}", err);
    } else {
        tracing::warn!("Rejected query: {}", err);
    }
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}

fn store_failure(err: crate::catalog::store::StoreError) -> HandlerError {
    tracing::error!("Record store failure: {}", err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}
