use super::types::{CelestialRecord, DEFAULT_SOURCE, NewRecord, derive_name};
use dashmap::DashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicU32, Ordering};
use thiserror::Error;

/// Failure of the record store itself, as opposed to a bad request.
/// Propagated to callers as a server-side error, never swallowed.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record store unavailable: {0}")]
    Unavailable(String),
}

/// Storage seam consumed by the query engine and the ingestion pipeline.
///
/// Implementations must hand out whole records only: a reader never observes
/// a partially written record, and ids are unique and never reused.
pub trait RecordStore: Send + Sync {
    /// Assigns the next id, applies ingestion-time defaults (derived name,
    /// `"Kepler"` source) and appends the record.
    fn insert(&self, record: NewRecord) -> Result<u32, StoreError>;

    /// Snapshot of the whole catalog in insertion order.
    fn all(&self) -> Result<Vec<CelestialRecord>, StoreError>;

    fn count(&self) -> Result<usize, StoreError>;

    fn find_by_id(&self, id: u32) -> Result<Option<CelestialRecord>, StoreError>;
}

/// Append-only in-memory store.
///
/// Records live in a vector guarded by a `RwLock` (insertion order doubles as
/// the stable-sort tie-break); a `DashMap` keeps the id -> position index so
/// point lookups skip the scan. Positions stay valid because records are
/// never removed or reordered.
pub struct InMemoryStore {
    records: RwLock<Vec<CelestialRecord>>,
    by_id: DashMap<u32, usize>,
    next_id: AtomicU32,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            by_id: DashMap::new(),
            next_id: AtomicU32::new(1),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore for InMemoryStore {
    fn insert(&self, record: NewRecord) -> Result<u32, StoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let name = match record.name {
            Some(name) if !name.trim().is_empty() => name,
            _ => derive_name(id, record.ra, record.dec),
        };
        let source = match record.source {
            Some(source) if !source.trim().is_empty() => source,
            _ => DEFAULT_SOURCE.to_string(),
        };

        records.push(CelestialRecord {
            id,
            name: Some(name),
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
            source,
        });
        self.by_id.insert(id, records.len() - 1);

        tracing::debug!("Stored record {} at position {}", id, records.len() - 1);
        Ok(id)
    }

    fn all(&self) -> Result<Vec<CelestialRecord>, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        Ok(records.clone())
    }

    fn count(&self) -> Result<usize, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        Ok(records.len())
    }

    fn find_by_id(&self, id: u32) -> Result<Option<CelestialRecord>, StoreError> {
        let Some(position) = self.by_id.get(&id).map(|entry| *entry.value()) else {
            return Ok(None);
        };
        let records = self
            .records
            .read()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        Ok(records.get(position).cloned())
    }
}
