//! gauge-rs: arc gauge (speedometer) layout and rendering engine.
//!
//! The crate turns a value range into pixel geometry for a swept scale arc,
//! a needle and its labels, and hands the result to a pluggable renderer.
//! Layout adapts to any aspect ratio and padding of the host drawing area.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{GaugeConfig, GaugeEngine};
pub use error::{GaugeError, GaugeResult};
