use serde::{Deserialize, Serialize};

use crate::error::{GaugeError, GaugeResult};

pub const GAUGE_STATE_JSON_SCHEMA_V1: u32 = 1;

/// The only gauge state that survives a host teardown/recreation cycle.
///
/// Everything else is configuration and is supplied again by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GaugeStateSnapshot {
    pub current_value: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GaugeStateJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: GaugeStateSnapshot,
}

impl GaugeStateSnapshot {
    #[must_use]
    pub const fn new(current_value: i64) -> Self {
        Self { current_value }
    }

    pub fn to_json_contract_v1_pretty(self) -> GaugeResult<String> {
        let payload = GaugeStateJsonContractV1 {
            schema_version: GAUGE_STATE_JSON_SCHEMA_V1,
            snapshot: self,
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            GaugeError::InvalidData(format!("failed to serialize gauge state contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned contract envelope.
    pub fn from_json_compat_str(input: &str) -> GaugeResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<GaugeStateSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: GaugeStateJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            GaugeError::InvalidData(format!("failed to parse gauge state json payload: {e}"))
        })?;
        if payload.schema_version != GAUGE_STATE_JSON_SCHEMA_V1 {
            return Err(GaugeError::InvalidData(format!(
                "unsupported gauge state schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}
