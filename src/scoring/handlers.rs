use super::esi::esi;
use axum::Json;
use serde::{Deserialize, Serialize};

/// Attributes of a hypothetical body, already normalized to Earth units
/// (Earth radii, AU, Kelvin). Not required to exist in the catalog.
#[derive(Debug, Deserialize)]
pub struct SimilarityRequest {
    pub radius: f64,
    pub distance: f64,
    pub temperature: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct SimilarityResponse {
    #[serde(rename = "ESI")]
    pub esi: f64,
}

/// Scores caller-supplied attributes without touching the store.
pub async fn handle_similarity(Json(req): Json<SimilarityRequest>) -> Json<SimilarityResponse> {
    let score = esi(req.radius, req.distance, req.temperature);
    tracing::debug!(
        "Similarity request radius={} distance={} -> {}",
        req.radius,
        req.distance,
        score
    );
    Json(SimilarityResponse { esi: score })
}
