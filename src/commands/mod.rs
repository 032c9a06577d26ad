//! Command handlers
//!
//! Each command handler orchestrates the execution of a CLI command.

pub mod measurements;
pub mod probes;

pub use measurements::run_measurements;
pub use probes::run_probes;
