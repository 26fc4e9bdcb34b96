use super::loader::IngestError;
use super::remote;
use super::types::{
    CreatePlanetRequest, CreatePlanetResponse, RemoteIngestRequest, RemoteIngestResponse,
};
use crate::catalog::store::{RecordStore, StoreError};
use crate::query::types::{ErrorResponse, PlanetView};
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;

pub async fn handle_create_planet(
    Extension(store): Extension<Arc<dyn RecordStore>>,
    Json(request): Json<CreatePlanetRequest>,
) -> Result<(StatusCode, Json<CreatePlanetResponse>), (StatusCode, Json<ErrorResponse>)> {
    let record = request.into_record().map_err(|reason| {
        tracing::warn!("Rejected planet payload: {}", reason);
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse { error: reason }),
        )
    })?;

    let id = store.insert(record).map_err(store_failure)?;
    let stored = store
        .find_by_id(id)
        .map_err(store_failure)?
        .ok_or_else(|| {
            tracing::error!("Planet {} missing immediately after insert", id);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "record store unavailable".to_string(),
                }),
            )
        })?;

    tracing::info!(
        "Created planet {} as {}",
        id,
        stored.name.as_deref().unwrap_or("unnamed")
    );

    Ok((
        StatusCode::CREATED,
        Json(CreatePlanetResponse {
            id,
            planet: PlanetView::from(&stored),
        }),
    ))
}

pub async fn handle_ingest_remote(
    Extension(store): Extension<Arc<dyn RecordStore>>,
    Json(request): Json<RemoteIngestRequest>,
) -> (StatusCode, Json<RemoteIngestResponse>) {
    let source_url = request.url;

    match remote::fetch_catalog(&source_url, store.as_ref()).await {
        Ok(report) => (
            StatusCode::OK,
            Json(RemoteIngestResponse {
                status: "ingested".to_string(),
                imported: report.imported,
                skipped: report.skipped,
                source_url,
            }),
        ),
        Err(IngestError::Download(err)) => {
            tracing::error!("Failed to download catalog from {}: {}", source_url, err);
            (
                StatusCode::BAD_GATEWAY,
                Json(failure_response("download_failed", source_url)),
            )
        }
        Err(IngestError::Csv(err)) => {
            tracing::warn!("Catalog from {} is not parseable CSV: {}", source_url, err);
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(failure_response("invalid_format", source_url)),
            )
        }
        Err(IngestError::Store(err)) => {
            tracing::error!("Failed to store remote catalog: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(failure_response("store_failed", source_url)),
            )
        }
    }
}

fn failure_response(status: &str, source_url: String) -> RemoteIngestResponse {
    RemoteIngestResponse {
        status: status.to_string(),
        imported: 0,
        skipped: 0,
        source_url,
    }
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
