mod entity;
mod options;

pub use entity::{BatchInput, BatchProperties, EMPTY_SCHEMA, InputEntity, InputProperties};
pub use options::{
    BATCHING_INPUT_TYPES, CatalogEntry, CompressionType, FormatType, INPUT_COMPRESSION_TYPES,
    INPUT_FORMAT_TYPES, INPUT_MODES, INPUT_TYPES, InputMode, InputType, WATERMARK_UNITS,
    WatermarkUnit,
};
