//! CLI argument parsing and output formatting
//!
//! Uses clap for ergonomic CLI argument definitions.

pub mod args;
pub mod fields;
pub mod output;
pub mod validators;

pub use args::{Cli, Commands};
