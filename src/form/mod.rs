mod actions;
mod capabilities;
mod fields;
mod resolver;
mod state;
mod validation;
mod view;

pub use actions::{InputEdit, InputSettingsHandler, dispatch_edit};
pub use capabilities::Capabilities;
pub use fields::{ChoiceView, Control, FieldId, FieldView, hub_connection_label, hub_name_label};
pub use resolver::{mode_options, type_options};
pub use state::{SchemaFetchError, SettingsState};
pub use validation::{
    NUMBER_ABOVE_ZERO_MESSAGE, NUMBER_AT_LEAST_ZERO_MESSAGE, validate_number,
    validate_watermark_value,
};
pub use view::{
    BLOB_SAMPLING_NOTE, CodeEditorView, EditorMode, FieldGroup, InputFormContext, InputFormView,
    SamplingView, SchemaEditorView, SchemaPane, resolve_view,
};
