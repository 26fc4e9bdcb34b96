//! Ingestion Module
//!
//! Brings catalog records into the store from every supported source.
//!
//! ## Workflow
//! 1. **Parse**: KOI-format CSV rows are read leniently. Sentinel cells
//!    (`nan`, `null`, blank) become absent attributes and rows without a
//!    positive radius are skipped.
//! 2. **Acquire**: catalogs arrive from a local file at startup, from a
//!    remote URL with retry and backoff, or as a single hand-written record
//!    over HTTP.
//! 3. **Store**: parsed records are inserted through the shared store
//!    handle, which assigns ids and derives missing names.
//!
//! ## Submodules
//! - `loader`: CSV row parsing and the import report.
//! - `remote`: catalog download with retry.
//! - `handlers`: HTTP endpoints for record creation and remote import.
//! - `types`: request/response shapes for those endpoints.

pub mod handlers;
pub mod loader;
pub mod remote;
pub mod types;
