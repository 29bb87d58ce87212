//! radar-rs: radar/spider chart layout engine.
//!
//! This crate converts ordered, labeled percentage values into deterministic
//! radar-chart geometry and keeps a strict architectural split between pure
//! layout math, engine orchestration, and pluggable render backends.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{RadarEngine, RadarEngineConfig};
pub use error::{RadarError, RadarResult};
