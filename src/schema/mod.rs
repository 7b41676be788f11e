//! Schema-text handling for the right pane: the stored sample schema is a
//! JSON document serialized as text, displayed through a JSON editor, and
//! refreshed by an external fetch with a cosmetic countdown.

use serde_json::Value;

use crate::domain::{BatchInput, EMPTY_SCHEMA, InputEntity, InputMode};

pub const INPUT_SCHEMA_EXAMPLE_WIKI: &str =
    "https://github.com/flowinput/flowinput/wiki/input-schema-examples";
pub const NORMALIZATION_EXAMPLE_WIKI: &str =
    "https://github.com/flowinput/flowinput/wiki/normalization-examples";

pub const READING_BLOBS_MESSAGE: &str = "Reading blobs...";
pub const GENERATING_SCHEMA_MESSAGE: &str = "Generating schema...";

/// Parse schema text for display. Invalid JSON passes through as the raw
/// string; the editor widget surfaces the parse problem itself.
pub fn parse_or_raw(text: &str) -> Value {
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

/// Serialize an edited schema value back into its stored text form. The
/// JSON editor only fires on valid JSON, so this cannot fail.
pub fn serialize_value(value: &Value) -> String {
    value.to_string()
}

/// The value the schema editor shows: the stored schema once one exists,
/// otherwise the last fetch-error document (or an empty object).
pub fn display_value(schema_file: &str, fetch_error: Option<&str>) -> Value {
    let raw = if schema_file != EMPTY_SCHEMA {
        schema_file
    } else {
        fetch_error.unwrap_or(EMPTY_SCHEMA)
    };
    parse_or_raw(raw)
}

/// The `{"Error": ...}` document displayed in place of the schema after a
/// failed fetch.
pub fn error_document(message: &str) -> String {
    serde_json::json!({ "Error": message }).to_string()
}

/// Loading-panel message while a fetch is in flight. Streaming samples live
/// data for a caller-supplied duration and counts down against an external
/// timer; once the countdown passes zero the backend is aggregating.
pub fn fetch_progress_label(mode: InputMode, sampling_input_duration: &str, timer: i64) -> String {
    match mode {
        InputMode::Batching => READING_BLOBS_MESSAGE.to_string(),
        InputMode::Streaming => match sampling_input_duration.trim().parse::<i64>() {
            Ok(duration) if duration - timer > -1 => {
                format!("Sampling Data... {}", duration - timer)
            }
            _ => GENERATING_SCHEMA_MESSAGE.to_string(),
        },
    }
}

/// Whether the Get-Schema action may run: the source must be reachable
/// (streaming needs a connection string; batching needs a selected batch
/// input with connection and path), no fetch may be in flight, and the
/// external capability flag must permit it.
pub fn can_fetch_schema(
    input: &InputEntity,
    batch_inputs: &[BatchInput],
    selected_batch_input: Option<usize>,
    fetching: bool,
    allowed: bool,
) -> bool {
    let source_ready = match input.mode {
        InputMode::Streaming => !input.properties.input_eventhub_connection.is_empty(),
        InputMode::Batching => selected_batch_input
            .and_then(|index| batch_inputs.get(index))
            .is_some_and(|batch| {
                !batch.properties.connection.is_empty() && !batch.properties.path.is_empty()
            }),
    };
    source_ready && !fetching && allowed
}
