//! Command handler layer.
//!
//! Parses nothing itself: takes the clap `Cli`, calls into `services/*`,
//! and owns the stdout wiring.

pub mod pack;

pub use pack::handle_pack;
