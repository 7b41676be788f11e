use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::options::{CompressionType, FormatType, InputMode, InputType, WatermarkUnit};

/// Sentinel meaning "no schema captured yet". The stored schema text is
/// either this literal or a serialized JSON object, never null.
pub const EMPTY_SCHEMA: &str = "{}";

/// Snapshot of the input entity being edited. Owned and mutated by the
/// external flow store; this crate only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct InputEntity {
    pub mode: InputMode,
    #[serde(rename = "type")]
    pub input_type: InputType,
    #[serde(default)]
    pub properties: InputProperties,
}

impl InputEntity {
    pub fn new(mode: InputMode, input_type: InputType) -> Self {
        Self {
            mode,
            input_type,
            properties: InputProperties::default(),
        }
    }
}

/// Streaming-side properties. Textbox-backed numeric settings stay strings:
/// validation is advisory and never blocks a value from being committed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct InputProperties {
    pub input_eventhub_name: String,
    pub input_eventhub_connection: String,
    pub input_subscription_id: String,
    pub input_resource_group: String,
    pub window_duration: String,
    pub max_rate: String,
    pub timestamp_column: String,
    pub watermark_value: String,
    pub watermark_unit: WatermarkUnit,
    pub input_schema_file: String,
    pub normalization_snippet: String,
}

impl Default for InputProperties {
    fn default() -> Self {
        Self {
            input_eventhub_name: String::new(),
            input_eventhub_connection: String::new(),
            input_subscription_id: String::new(),
            input_resource_group: String::new(),
            window_duration: String::new(),
            max_rate: String::new(),
            timestamp_column: String::new(),
            watermark_value: String::new(),
            watermark_unit: WatermarkUnit::Seconds,
            input_schema_file: EMPTY_SCHEMA.to_string(),
            normalization_snippet: String::new(),
        }
    }
}

/// One entry of the flow's batch-input collection. Selection into the
/// collection is supplied externally and may be unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BatchInput {
    #[serde(default)]
    pub properties: BatchProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct BatchProperties {
    pub connection: String,
    pub path: String,
    pub format_type: FormatType,
    pub compression_type: CompressionType,
}

impl Default for BatchProperties {
    fn default() -> Self {
        Self {
            connection: String::new(),
            path: String::new(),
            format_type: FormatType::Json,
            compression_type: CompressionType::None,
        }
    }
}
