mod engine;
mod frame_builder;
mod gauge_config;
mod invalidation;
mod state_snapshot;

pub use engine::GaugeEngine;
pub use frame_builder::format_value_label;
pub use gauge_config::{GaugeConfig, GaugeStyle};
pub use invalidation::{InvalidationLevel, RenderOutcome};
pub use state_snapshot::{
    GAUGE_STATE_JSON_SCHEMA_V1, GaugeStateJsonContractV1, GaugeStateSnapshot,
};
