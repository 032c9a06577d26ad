//! atlasctl - RIPE Atlas command-line client library
//!
//! This library provides the core functionality for searching RIPE Atlas
//! measurements and probes and rendering the results.
//!
//! # Modules
//!
//! - [`api`]: Atlas API abstraction layer
//! - [`cli`]: Command-line interface definitions and argument validators
//! - [`commands`]: Command handlers
//! - [`config`]: Configuration system
//! - [`domain`]: Domain models
//! - [`error`]: Error types
//! - [`logging`]: Logger setup

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;

#[cfg(test)]
pub mod mock;

pub use error::{AppError, Result};
