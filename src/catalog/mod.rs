//! Catalog Module
//!
//! Owns the record schema and the store that holds it.
//!
//! ## Overview
//! The catalog is the system of record for exoplanet candidates. Records
//! enter through the ingestion pipeline, receive an id and ingestion-time
//! defaults here, and are immutable afterwards. Everything above this module
//! (query engine, scoring, projection) treats the store as a read-only
//! snapshot source.
//!
//! ## Responsibilities
//! - **Schema**: The nullable `CelestialRecord` value type and its
//!   `Disposition` vocabulary.
//! - **Storage**: The `RecordStore` seam plus the in-memory implementation
//!   used in production.
//! - **Catalog endpoints**: The full-table export and the aggregate stats
//!   endpoint. Both read the store directly and skip the query engine.
//!
//! ## Submodules
//! - **`types`**: Record value types and naming/defaulting rules.
//! - **`store`**: The `RecordStore` trait and `InMemoryStore`.
//! - **`handlers`**: HTTP handlers for catalog-level endpoints.

pub mod handlers;
pub mod store;
pub mod types;
