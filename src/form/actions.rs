use crate::domain::{CompressionType, FormatType, InputMode, InputType, WatermarkUnit};

/// One edit per update callback of the settings contract. Every user
/// interaction is expressed as exactly one of these; the entity is never
/// mutated in place.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEdit {
    Mode(InputMode),
    Type(InputType),
    HubName(String),
    HubConnection(String),
    SubscriptionId(String),
    ResourceGroup(String),
    WindowDuration(String),
    MaxRate(String),
    TimestampColumn(String),
    WatermarkValue(String),
    WatermarkUnit(WatermarkUnit),
    Schema(String),
    NormalizationSnippet(String),
    SamplingInputDuration(String),
    BatchInputPath(String),
    BatchInputConnection(String),
    BatchInputFormatType(FormatType),
    BatchInputCompressionType(CompressionType),
}

/// Implemented by the external flow store. Each method receives the new
/// value and is expected to update the store synchronously, so the next
/// [`resolve_view`](crate::form::resolve_view) call sees the fresh snapshot.
pub trait InputSettingsHandler {
    fn update_mode(&mut self, mode: InputMode);
    fn update_type(&mut self, input_type: InputType);
    fn update_hub_name(&mut self, name: String);
    fn update_hub_connection(&mut self, connection: String);
    fn update_subscription_id(&mut self, subscription_id: String);
    fn update_resource_group(&mut self, resource_group: String);
    fn update_window_duration(&mut self, duration: String);
    fn update_max_rate(&mut self, max_rate: String);
    fn update_timestamp_column(&mut self, column: String);
    fn update_watermark_value(&mut self, value: String);
    fn update_watermark_unit(&mut self, unit: WatermarkUnit);
    fn update_schema(&mut self, schema: String);
    fn update_normalization_snippet(&mut self, snippet: String);
    fn update_sampling_input_duration(&mut self, duration: String);
    fn update_batch_input_path(&mut self, path: String);
    fn update_batch_input_connection(&mut self, connection: String);
    fn update_batch_input_format_type(&mut self, format_type: FormatType);
    fn update_batch_input_compression_type(&mut self, compression_type: CompressionType);
}

/// Route an edit to its handler method.
pub fn dispatch_edit(handler: &mut dyn InputSettingsHandler, edit: InputEdit) {
    match edit {
        InputEdit::Mode(mode) => handler.update_mode(mode),
        InputEdit::Type(input_type) => handler.update_type(input_type),
        InputEdit::HubName(name) => handler.update_hub_name(name),
        InputEdit::HubConnection(connection) => handler.update_hub_connection(connection),
        InputEdit::SubscriptionId(subscription_id) => {
            handler.update_subscription_id(subscription_id)
        }
        InputEdit::ResourceGroup(resource_group) => handler.update_resource_group(resource_group),
        InputEdit::WindowDuration(duration) => handler.update_window_duration(duration),
        InputEdit::MaxRate(max_rate) => handler.update_max_rate(max_rate),
        InputEdit::TimestampColumn(column) => handler.update_timestamp_column(column),
        InputEdit::WatermarkValue(value) => handler.update_watermark_value(value),
        InputEdit::WatermarkUnit(unit) => handler.update_watermark_unit(unit),
        InputEdit::Schema(schema) => handler.update_schema(schema),
        InputEdit::NormalizationSnippet(snippet) => handler.update_normalization_snippet(snippet),
        InputEdit::SamplingInputDuration(duration) => {
            handler.update_sampling_input_duration(duration)
        }
        InputEdit::BatchInputPath(path) => handler.update_batch_input_path(path),
        InputEdit::BatchInputConnection(connection) => {
            handler.update_batch_input_connection(connection)
        }
        InputEdit::BatchInputFormatType(format_type) => {
            handler.update_batch_input_format_type(format_type)
        }
        InputEdit::BatchInputCompressionType(compression_type) => {
            handler.update_batch_input_compression_type(compression_type)
        }
    }
}
