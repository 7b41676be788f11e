use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Externally supplied enablement flags, one per editable region of the
/// form. They reflect whether the surrounding flow is in an editable state
/// and are ANDed with the mode/type applicability rules during resolution.
///
/// Subscription id and resource group deliberately share `hub_connection`:
/// all three belong to the same credential configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Capabilities {
    pub mode_dropdown: bool,
    pub type_dropdown: bool,
    pub hub_name: bool,
    pub hub_connection: bool,
    pub window_duration: bool,
    pub max_rate: bool,
    pub timestamp_column: bool,
    pub watermark: bool,
    pub schema_editor: bool,
    pub normalization_editor: bool,
    pub get_schema_button: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::all_enabled()
    }
}

impl Capabilities {
    pub fn all_enabled() -> Self {
        Self {
            mode_dropdown: true,
            type_dropdown: true,
            hub_name: true,
            hub_connection: true,
            window_duration: true,
            max_rate: true,
            timestamp_column: true,
            watermark: true,
            schema_editor: true,
            normalization_editor: true,
            get_schema_button: true,
        }
    }

    /// Every region disabled, e.g. while the flow is deploying.
    pub fn locked() -> Self {
        Self {
            mode_dropdown: false,
            type_dropdown: false,
            hub_name: false,
            hub_connection: false,
            window_duration: false,
            max_rate: false,
            timestamp_column: false,
            watermark: false,
            schema_editor: false,
            normalization_editor: false,
            get_schema_button: false,
        }
    }
}
