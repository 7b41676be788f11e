use anyhow::{Context, Result, bail};
use jsonschema::validator_for;
use schemars::{JsonSchema, schema_for};
use serde_json::Value;
use tracing::debug;

use crate::domain::{BatchInput, InputEntity};
use crate::form::Capabilities;

use super::format::DocumentFormat;

/// Parse structured data in any supported format into a `serde_json::Value`.
pub fn parse_document_str(contents: &str, format: DocumentFormat) -> Result<Value> {
    match format {
        DocumentFormat::Json => {
            serde_json::from_str::<Value>(contents).with_context(|| "failed to parse JSON document")
        }
        #[cfg(feature = "yaml")]
        DocumentFormat::Yaml => {
            serde_yaml::from_str::<Value>(contents).with_context(|| "failed to parse YAML document")
        }
        #[cfg(feature = "toml")]
        DocumentFormat::Toml => contents
            .parse::<toml::Value>()
            .with_context(|| "failed to parse TOML document")
            .and_then(|value| {
                serde_json::to_value(value).context("failed to convert TOML to JSON")
            }),
    }
}

/// Check `value` against the JSON Schema derived for `T`, reporting every
/// violation with its instance path.
fn validate_shape<T: JsonSchema>(value: &Value, label: &str) -> Result<()> {
    let schema =
        serde_json::to_value(schema_for!(T)).context("failed to serialize document schema")?;
    let validator = validator_for(&schema).context("failed to compile document schema")?;
    if validator.is_valid(value) {
        return Ok(());
    }
    let issues: Vec<String> = validator
        .iter_errors(value)
        .map(|error| {
            let pointer = error.instance_path.to_string();
            if pointer.is_empty() {
                format!("<root>: {error}")
            } else {
                format!("{pointer}: {error}")
            }
        })
        .collect();
    bail!("invalid {label} document:\n  {}", issues.join("\n  "))
}

pub fn entity_from_value(value: &Value) -> Result<InputEntity> {
    validate_shape::<InputEntity>(value, "input entity")?;
    let entity: InputEntity =
        serde_json::from_value(value.clone()).context("failed to decode input entity")?;
    debug!(mode = %entity.mode, input_type = %entity.input_type, "loaded input entity");
    Ok(entity)
}

pub fn load_input_entity(contents: &str, format: DocumentFormat) -> Result<InputEntity> {
    entity_from_value(&parse_document_str(contents, format)?)
}

pub fn batch_inputs_from_value(value: &Value) -> Result<Vec<BatchInput>> {
    validate_shape::<Vec<BatchInput>>(value, "batch input")?;
    let batches: Vec<BatchInput> =
        serde_json::from_value(value.clone()).context("failed to decode batch inputs")?;
    debug!(count = batches.len(), "loaded batch inputs");
    Ok(batches)
}

pub fn load_batch_inputs(contents: &str, format: DocumentFormat) -> Result<Vec<BatchInput>> {
    batch_inputs_from_value(&parse_document_str(contents, format)?)
}

pub fn capabilities_from_value(value: &Value) -> Result<Capabilities> {
    validate_shape::<Capabilities>(value, "capability")?;
    serde_json::from_value(value.clone()).context("failed to decode capability document")
}

pub fn load_capabilities(contents: &str, format: DocumentFormat) -> Result<Capabilities> {
    capabilities_from_value(&parse_document_str(contents, format)?)
}
