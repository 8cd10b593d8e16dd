//! Circus train application layer.
//!
//! Everything around the packing core: manifest loading, layered
//! configuration, the validate → pack → audit pipeline, and reports.

#![allow(clippy::uninlined_format_args)]

pub mod config;
pub mod loader;
pub mod pipeline;
pub mod render;

pub use config::{OutputFormat, TrainConfig};
pub use loader::load_records;
pub use pipeline::{run, TrainRun};
