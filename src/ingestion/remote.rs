use super::loader::{self, ImportReport, IngestError};
use crate::catalog::store::RecordStore;
use std::time::Duration;

const FETCH_ATTEMPTS: usize = 3;
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Downloads a KOI-format CSV catalog and imports it into the store.
pub async fn fetch_catalog(
    url: &str,
    store: &dyn RecordStore,
) -> Result<ImportReport, IngestError> {
    tracing::info!("Fetching remote catalog from {}", url);

    let client = reqwest::Client::new();
    let response = get_with_retry(&client, url, FETCH_TIMEOUT, FETCH_ATTEMPTS)
        .await?
        .error_for_status()?;
    let body = response.text().await?;

    loader::load_catalog_from_reader(body.as_bytes(), store)
}

async fn get_with_retry(
    client: &reqwest::Client,
    url: &str,
    timeout: Duration,
    attempts: usize,
) -> Result<reqwest::Response, reqwest::Error> {
    let mut delay_ms = 150u64;
    let mut attempt = 0usize;

    loop {
        match client.get(url).timeout(timeout).send().await {
            Ok(response) => return Ok(response),
            Err(err) => {
                attempt += 1;
                if attempt >= attempts {
                    return Err(err);
                }
                tracing::warn!("Catalog fetch attempt {} failed: {}", attempt, err);
                let jitter = rand::random::<u64>() % 50;
                tokio::time::sleep(Duration::from_millis(delay_ms + jitter)).await;
                // Exponential backoff, capped at 1.2s between attempts.
                delay_ms = (delay_ms * 2).min(1200);
            }
        }
    }
}
