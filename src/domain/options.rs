use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Ingestion style of an input: continuous streaming or scheduled batching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    Streaming,
    Batching,
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputMode::Streaming => write!(f, "streaming"),
            InputMode::Batching => write!(f, "batching"),
        }
    }
}

/// Concrete source technology behind an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    Local,
    Blob,
    Events,
    Iothub,
    Kafka,
    Kafkaeventhub,
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputType::Local => write!(f, "local"),
            InputType::Blob => write!(f, "blob"),
            InputType::Events => write!(f, "events"),
            InputType::Iothub => write!(f, "iothub"),
            InputType::Kafka => write!(f, "kafka"),
            InputType::Kafkaeventhub => write!(f, "kafkaeventhub"),
        }
    }
}

/// Unit for the allowed-lateness watermark window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum WatermarkUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl fmt::Display for WatermarkUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WatermarkUnit::Seconds => write!(f, "seconds"),
            WatermarkUnit::Minutes => write!(f, "minutes"),
            WatermarkUnit::Hours => write!(f, "hours"),
            WatermarkUnit::Days => write!(f, "days"),
        }
    }
}

/// Serialization format of batch blob payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum FormatType {
    Json,
    Csv,
    Parquet,
}

impl fmt::Display for FormatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatType::Json => write!(f, "json"),
            FormatType::Csv => write!(f, "csv"),
            FormatType::Parquet => write!(f, "parquet"),
        }
    }
}

/// Compression applied to batch blob payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum CompressionType {
    None,
    Gzip,
    Deflate,
}

impl fmt::Display for CompressionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompressionType::None => write!(f, "none"),
            CompressionType::Gzip => write!(f, "gzip"),
            CompressionType::Deflate => write!(f, "deflate"),
        }
    }
}

/// One selectable catalog entry. The `disabled` attribute is carried through
/// to dropdown options untouched: a disabled entry stays visible but cannot
/// be selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry<T: 'static> {
    pub value: T,
    pub label: &'static str,
    pub disabled: bool,
}

impl<T> CatalogEntry<T> {
    const fn new(value: T, label: &'static str) -> Self {
        Self {
            value,
            label,
            disabled: false,
        }
    }
}

pub const INPUT_MODES: &[CatalogEntry<InputMode>] = &[
    CatalogEntry::new(InputMode::Streaming, "Streaming"),
    CatalogEntry::new(InputMode::Batching, "Batching"),
];

/// Full type catalog in display order. Streaming drops `Local`, batching
/// uses [`BATCHING_INPUT_TYPES`] instead.
pub const INPUT_TYPES: &[CatalogEntry<InputType>] = &[
    CatalogEntry::new(InputType::Events, "Event Hub"),
    CatalogEntry::new(InputType::Iothub, "IoT Hub"),
    CatalogEntry::new(InputType::Kafka, "Kafka"),
    CatalogEntry::new(InputType::Kafkaeventhub, "Kafka-Enabled Event Hub"),
    CatalogEntry::new(InputType::Blob, "Blob Storage"),
    CatalogEntry::new(InputType::Local, "Local"),
];

pub const BATCHING_INPUT_TYPES: &[CatalogEntry<InputType>] =
    &[CatalogEntry::new(InputType::Blob, "Blob Storage")];

pub const WATERMARK_UNITS: &[CatalogEntry<WatermarkUnit>] = &[
    CatalogEntry::new(WatermarkUnit::Seconds, "Seconds"),
    CatalogEntry::new(WatermarkUnit::Minutes, "Minutes"),
    CatalogEntry::new(WatermarkUnit::Hours, "Hours"),
    CatalogEntry::new(WatermarkUnit::Days, "Days"),
];

pub const INPUT_FORMAT_TYPES: &[CatalogEntry<FormatType>] = &[
    CatalogEntry::new(FormatType::Json, "JSON"),
    CatalogEntry::new(FormatType::Csv, "CSV"),
    CatalogEntry::new(FormatType::Parquet, "Parquet"),
];

pub const INPUT_COMPRESSION_TYPES: &[CatalogEntry<CompressionType>] = &[
    CatalogEntry::new(CompressionType::None, "None"),
    CatalogEntry::new(CompressionType::Gzip, "GZip"),
    CatalogEntry::new(CompressionType::Deflate, "Deflate"),
];
