use std::fmt;

use serde::Serialize;

use crate::domain::{CatalogEntry, InputType};

/// Stable identifier of every control the form can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    Mode,
    Type,
    HubName,
    HubConnection,
    SubscriptionId,
    ResourceGroup,
    WindowDuration,
    MaxRate,
    TimestampColumn,
    WatermarkValue,
    WatermarkUnit,
    BlobConnection,
    BlobPath,
    FormatType,
    CompressionType,
    ShowNormalization,
}

/// One dropdown option row, `disabled` passed through from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceView {
    pub key: String,
    pub label: &'static str,
    pub disabled: bool,
}

impl ChoiceView {
    pub fn from_entry<T: fmt::Display>(entry: &CatalogEntry<T>) -> Self {
        Self {
            key: entry.value.to_string(),
            label: entry.label,
            disabled: entry.disabled,
        }
    }
}

/// The renderable control behind a field. `Text` values are `None` when the
/// backing batch input is unselected, so the renderer shows an empty box.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Control {
    Text {
        value: Option<String>,
        masked: bool,
        placeholder: Option<&'static str>,
    },
    Dropdown {
        options: Vec<ChoiceView>,
        selected: Option<String>,
    },
    Toggle {
        on: bool,
    },
}

/// A fully resolved field: what to render, whether it accepts input, and the
/// advisory validation message ("" when valid).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldView {
    pub id: FieldId,
    pub label: Option<&'static str>,
    pub control: Control,
    pub enabled: bool,
    pub error: String,
}

impl FieldView {
    pub(crate) fn new(id: FieldId, label: Option<&'static str>, control: Control) -> Self {
        Self {
            id,
            label,
            control,
            enabled: true,
            error: String::new(),
        }
    }

    pub(crate) fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub(crate) fn error(mut self, error: String) -> Self {
        self.error = error;
        self
    }
}

pub const MODE_LABEL: &str = "Mode";
pub const TYPE_LABEL: &str = "Type";
pub const SUBSCRIPTION_ID_LABEL: &str = "Subscription Id";
pub const RESOURCE_GROUP_LABEL: &str = "Resource Group Name";
pub const WINDOW_DURATION_LABEL: &str = "Batch Interval in Seconds";
pub const MAX_RATE_LABEL: &str = "Maximum Events per Batch Interval";
pub const TIMESTAMP_COLUMN_LABEL: &str = "Timestamp Column for Windowing";
pub const WATERMARK_LABEL: &str = "Wait Time for Late Arriving Data";
pub const BLOB_CONNECTION_LABEL: &str = "Blob Connection String";
pub const BLOB_PATH_LABEL: &str = "Blob Path";
pub const FORMAT_LABEL: &str = "Format";
pub const COMPRESSION_LABEL: &str = "Compression";
pub const SHOW_NORMALIZATION_LABEL: &str = "Show Normalization";

pub const USE_DEFAULT_PLACEHOLDER: &str = "use default";
pub const BLOB_PATH_PLACEHOLDER: &str =
    "e.g. wasbs://<container_name>@<storage_account_name>.blob.core.windows.net/{yyyy-MM-dd}";

/// Hub-name caption. IoT hubs expose an Event Hub-compatible name; every
/// other hub-name-bearing type takes a topic list.
pub fn hub_name_label(input_type: InputType) -> &'static str {
    match input_type {
        InputType::Iothub => "Event Hub-Compatible Name",
        _ => "Topics (Use commas to separate topics)",
    }
}

/// Connection-string caption per source technology.
pub fn hub_connection_label(input_type: InputType) -> &'static str {
    match input_type {
        InputType::Iothub => "Event Hub-Compatible Endpoint",
        InputType::Kafka => "Bootstrap Servers (Use commas to separate server IPs/URLs)",
        InputType::Kafkaeventhub => "Event Hub Namespace Connection String",
        InputType::Blob => "Blob Connection String",
        _ => "Connection String",
    }
}
