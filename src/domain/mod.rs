//! Domain models for atlasctl
//!
//! Records returned by the Atlas API and the filters sent to it.

pub mod filter;
pub mod measurement;
pub mod probe;
pub mod status;

pub use filter::{FilterValue, Filters};
pub use measurement::Measurement;
pub use probe::Probe;
pub use status::StatusColour;
