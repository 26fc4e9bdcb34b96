use axum::{
    Router,
    extract::Extension,
    routing::{get, post},
};
use exoplanet_catalog::catalog::handlers::{handle_catalog_stats, handle_export_catalog};
use exoplanet_catalog::catalog::store::{InMemoryStore, RecordStore};
use exoplanet_catalog::ingestion::handlers::{handle_create_planet, handle_ingest_remote};
use exoplanet_catalog::ingestion::loader::load_catalog_csv;
use exoplanet_catalog::query::handlers::{
    handle_get_planet, handle_list_planets, handle_search_by_radius,
    handle_search_by_temperature, handle_search_earth_like, handle_search_habitable_zone,
    handle_search_sorted,
};
use exoplanet_catalog::scoring::handlers::handle_similarity;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        // .with_max_level(tracing::Level::DEBUG)
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut bind_addr: SocketAddr = "127.0.0.1:8000".parse()?;
    let mut data_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| anyhow::anyhow!("--bind requires <addr:port>"))?;
                bind_addr = value.parse()?;
                i += 2;
            }
            "--data" => {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| anyhow::anyhow!("--data requires <csv path>"))?;
                data_path = Some(value.clone());
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    // 1. Record store:
    let store: Arc<dyn RecordStore> = Arc::new(InMemoryStore::new());

    // 2. Optional catalog preload:
    if let Some(path) = &data_path {
        tracing::info!("Loading catalog from {}", path);
        let report = load_catalog_csv(Path::new(path), store.as_ref())?;
        tracing::info!(
            "Catalog ready: {} records loaded, {} rows skipped",
            report.imported,
            report.skipped
        );
    } else {
        tracing::info!("No --data file given, starting with an empty catalog");
    }

    // 3. HTTP Router:
    let app = Router::new()
        .route(
            "/planets",
            get(handle_list_planets).post(handle_create_planet),
        )
        .route("/planets/all", get(handle_export_catalog))
        .route("/planets/:id", get(handle_get_planet))
        .route("/search/by-radius", get(handle_search_by_radius))
        .route("/search/by-temperature", get(handle_search_by_temperature))
        .route("/search/earth-like", get(handle_search_earth_like))
        .route("/search/habitable-zone", get(handle_search_habitable_zone))
        .route("/search/sorted", get(handle_search_sorted))
        .route("/similarity", post(handle_similarity))
        .route("/stats", get(handle_catalog_stats))
        .route("/ingest/remote", post(handle_ingest_remote))
        .layer(Extension(store.clone()));

    // 4. Start HTTP server:
    tracing::info!("Catalog service listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
