//! Shared data model layer (structs only).
//!
//! ## Files
//! - `models.rs` — file entries and the pack report emitted by `--json`.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects.
//!
//! ## Compatibility note
//! `PackReport` is the `--json` output schema. Keep changes in sync with
//! `docs/contracts/pack-report.schema.json`.

pub mod models;
