use serde::{Deserialize, Serialize};

use crate::core::ToJsonObject;
use crate::error::{ChartError, ChartResult};

use super::Chart;

pub const CHART_CONFIG_JSON_SCHEMA_V1: u32 = 1;

/// Versioned envelope for persisted builder state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfigJsonContractV1 {
    pub schema_version: u32,
    pub chart: Chart,
}

impl Chart {
    /// Serializes the Chart.js document as compact JSON text.
    pub fn to_json_string(&self) -> ChartResult<String> {
        serde_json::to_string(&self.to_value())
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize chart json: {e}")))
    }

    /// Serializes the Chart.js document as indented JSON text.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self.to_value())
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize chart json: {e}")))
    }

    /// Serializes the builder state (not the Chart.js document) so it can be
    /// restored with [`Chart::from_config_json_str`].
    ///
    /// Fails when a dataset holds a non-finite style value.
    pub fn to_config_json_pretty(&self) -> ChartResult<String> {
        self.data().validate()?;
        let payload = ChartConfigJsonContractV1 {
            schema_version: CHART_CONFIG_JSON_SCHEMA_V1,
            chart: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart config contract v1: {e}"))
        })
    }

    /// Restores builder state from a v1 envelope or a bare chart payload.
    pub fn from_config_json_str(input: &str) -> ChartResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse chart config json: {e}"))
        })?;

        if value.get("schema_version").is_none() {
            return serde_json::from_value(value).map_err(|e| {
                ChartError::InvalidData(format!("failed to parse chart config payload: {e}"))
            });
        }

        let payload: ChartConfigJsonContractV1 = serde_json::from_value(value).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse chart config contract: {e}"))
        })?;
        if payload.schema_version != CHART_CONFIG_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported chart config schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.chart)
    }
}
