//! Scoring Module
//!
//! Pure similarity and habitability scores derived from a record's physical
//! attributes.
//!
//! ## Overview
//! Two independent heuristics, both deterministic and storage-free:
//! the Earth Similarity Index (exponential falloff around Earth's radius,
//! orbital distance, and temperature) and a cruder multiplicative
//! habitability score. Scores are computed at response time and attached to
//! projected records; they are never persisted.
//!
//! The orbital-distance proxy derived from the period also lives here, since
//! the catalog schema stores no semi-major axis.
//!
//! ## Submodules
//! - **`esi`**: ESI, the distance proxy, and record-level wrappers.
//! - **`habitability`**: The heuristic habitability score.
//! - **`handlers`**: The ad hoc similarity endpoint.

pub mod esi;
pub mod habitability;
pub mod handlers;

#[cfg(test)]
mod tests;
