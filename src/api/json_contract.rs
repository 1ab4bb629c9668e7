use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::core::TickDecision;
use crate::error::{TickError, TickResult};

pub const TICK_DECISIONS_JSON_SCHEMA_V1: u32 = 1;

/// Versioned envelope for handing a selection result to an out-of-process renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickDecisionsJsonContractV1<V> {
    pub schema_version: u32,
    pub ticks: Vec<TickDecision<V>>,
}

impl<V: Serialize> TickDecisionsJsonContractV1<V> {
    #[must_use]
    pub fn new(ticks: Vec<TickDecision<V>>) -> Self {
        Self {
            schema_version: TICK_DECISIONS_JSON_SCHEMA_V1,
            ticks,
        }
    }

    pub fn to_json_pretty(&self) -> TickResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            TickError::Serialization(format!("failed to serialize tick decisions v1: {e}"))
        })
    }
}

impl<V: DeserializeOwned> TickDecisionsJsonContractV1<V> {
    /// Accepts either the versioned envelope or a bare array of decisions.
    pub fn from_json_compat_str(input: &str) -> TickResult<Self> {
        if let Ok(ticks) = serde_json::from_str::<Vec<TickDecision<V>>>(input) {
            return Ok(Self {
                schema_version: TICK_DECISIONS_JSON_SCHEMA_V1,
                ticks,
            });
        }
        let payload: Self = serde_json::from_str(input).map_err(|e| {
            TickError::Serialization(format!("failed to parse tick decisions json: {e}"))
        })?;
        if payload.schema_version != TICK_DECISIONS_JSON_SCHEMA_V1 {
            return Err(TickError::Serialization(format!(
                "unsupported tick decisions schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload)
    }
}
