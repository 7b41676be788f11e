#![deny(rust_2018_idioms)]

pub mod domain;
pub mod form;
pub mod io;
pub mod schema;

pub use domain::{BatchInput, InputEntity, InputMode, InputType};
pub use form::{
    Capabilities, InputEdit, InputFormContext, InputFormView, InputSettingsHandler,
    SchemaFetchError, SettingsState, dispatch_edit, resolve_view,
};

pub mod prelude {
    pub use super::domain::{BatchInput, InputEntity, InputMode, InputType, WatermarkUnit};
    pub use super::form::{
        Capabilities, FieldId, InputEdit, InputFormContext, InputFormView, InputSettingsHandler,
        SettingsState, dispatch_edit, resolve_view,
    };
}
