//! Service layer containing the conversion logic and side-effect helpers.
//!
//! ## Service map
//! - `sanitize.rs` — file name to C identifier.
//! - `render.rs` — byte-array declaration text.
//! - `converter.rs` — directory listing, file reads, output file lifecycle.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod converter;
pub mod output;
pub mod render;
pub mod sanitize;
