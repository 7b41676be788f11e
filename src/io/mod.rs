mod format;
mod input;

pub use format::DocumentFormat;
pub use input::{
    batch_inputs_from_value, capabilities_from_value, entity_from_value, load_batch_inputs,
    load_capabilities, load_input_entity, parse_document_str,
};
