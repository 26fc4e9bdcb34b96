//! Exoplanet Catalog Service Library
//!
//! This library crate defines the core modules of the catalog service.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The service is composed of four loosely coupled subsystems:
//!
//! - **`catalog`**: The record model and storage layer. Defines the
//!   `CelestialRecord` attribute schema and an in-memory store that assigns
//!   ids and derives designations for unnamed objects.
//! - **`ingestion`**: The data intake pipeline. Parses KOI-format CSV
//!   catalogs from local files or remote URLs, tolerating the sentinel
//!   values and header drift found in real survey exports.
//! - **`query`**: The retrieval logic. Compiles attribute range filters into
//!   predicates, applies stable missing-last ordering, and paginates with
//!   clamped page sizes.
//! - **`scoring`**: The similarity heuristics. Computes Earth-similarity
//!   and habitability scores from a record's physical attributes.

pub mod catalog;
pub mod ingestion;
pub mod query;
pub mod scoring;
