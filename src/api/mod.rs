//! Atlas API abstraction layer
//!
//! Provides a trait-based abstraction over the REST API for testability.

pub mod client;
pub mod traits;

pub use client::AtlasClient;
pub use traits::{AtlasApi, RecordPage};
