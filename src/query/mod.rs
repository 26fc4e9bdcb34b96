//! Query Module
//!
//! The attribute-indexed query engine: range predicates, ordering, and
//! pagination over the catalog, plus the projection to the external shape.
//!
//! ## Overview
//! A query is a `QuerySpec`: optional inclusive min/max bounds per numeric
//! attribute (including the derived orbital distance and ESI), an optional
//! case-insensitive name filter, one sortable field with a direction, and a
//! clamped page. The engine evaluates the predicate against a full store
//! snapshot, sorts stably with missing values last, and slices the page.
//! There is no index shortcutting; every query scans the snapshot.
//!
//! ## Responsibilities
//! - **Predicate construction**: Conjunction of range checks and the name
//!   filter; degenerate bounds match nothing rather than erroring.
//! - **Execution**: Filter, stable sort, clamp, paginate; all-or-nothing.
//! - **Projection**: The external field aliases and score annotations.
//! - **API**: The general `/planets` query, point lookup, and the preset
//!   search endpoints.
//!
//! ## Submodules
//! - **`spec`**: `QuerySpec`, the sortable-field table, direction parsing.
//! - **`predicate`**: Conjunctive filter built from a spec.
//! - **`engine`**: Query execution and its error taxonomy.
//! - **`types`**: Projected record shape and response envelopes.
//! - **`handlers`**: HTTP handlers for the query surfaces.

pub mod engine;
pub mod handlers;
pub mod predicate;
pub mod spec;
pub mod types;
