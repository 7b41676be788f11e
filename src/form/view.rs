//! Resolves one render-ready snapshot of the input-settings form from the
//! entity, the capability flags and the transient UI state. Derivation only:
//! nothing here mutates the entity or remembers anything between calls.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::domain::{
    BatchInput, CompressionType, FormatType, INPUT_COMPRESSION_TYPES, INPUT_FORMAT_TYPES,
    InputEntity, InputMode, InputType, WATERMARK_UNITS,
};
use crate::schema;

use super::capabilities::Capabilities;
use super::fields::{
    BLOB_CONNECTION_LABEL, BLOB_PATH_LABEL, BLOB_PATH_PLACEHOLDER, COMPRESSION_LABEL, ChoiceView,
    Control, FORMAT_LABEL, FieldId, FieldView, MAX_RATE_LABEL, MODE_LABEL, RESOURCE_GROUP_LABEL,
    SHOW_NORMALIZATION_LABEL, SUBSCRIPTION_ID_LABEL, TIMESTAMP_COLUMN_LABEL, TYPE_LABEL,
    USE_DEFAULT_PLACEHOLDER, WATERMARK_LABEL, WINDOW_DURATION_LABEL, hub_connection_label,
    hub_name_label,
};
use super::resolver;
use super::state::SettingsState;
use super::validation::{validate_number, validate_watermark_value};

pub const BLOB_SAMPLING_NOTE: &str =
    "Sampling from the last 3 blobs based on the last modified time.";

/// Everything the derivation reads. The entity and batch inputs are the
/// external store's current snapshot; `timer` is the externally driven
/// countdown tick while a fetch is in flight.
#[derive(Debug, Clone, Copy)]
pub struct InputFormContext<'a> {
    pub input: &'a InputEntity,
    pub batch_inputs: &'a [BatchInput],
    pub selected_batch_input: Option<usize>,
    pub local_one_box: bool,
    pub capabilities: &'a Capabilities,
    pub fetching_input_schema: bool,
    pub sampling_input_duration: &'a str,
    pub timer: i64,
    pub settings: &'a SettingsState,
}

/// One divider-separated run of fields in the left pane, in render order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldGroup {
    pub id: &'static str,
    pub fields: IndexMap<FieldId, FieldView>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorMode {
    Code,
    Tree,
    View,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaEditorView {
    pub value: Value,
    pub mode: EditorMode,
    pub allowed_modes: &'static [EditorMode],
    pub example_wiki: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SchemaPane {
    Loading { message: String },
    Editor(SchemaEditorView),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeEditorView {
    pub language: &'static str,
    pub text: String,
    pub read_only: bool,
    pub example_wiki: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SamplingView {
    Duration { value: String, error: String },
    BlobNote { message: &'static str },
}

/// The fully resolved form: grouped left-pane fields plus the schema pane,
/// Get-Schema enablement, sampling section and optional normalization
/// editor on the right.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputFormView {
    pub left_pane: Vec<FieldGroup>,
    pub schema_pane: SchemaPane,
    pub get_schema_enabled: bool,
    pub sampling: SamplingView,
    pub normalization: Option<CodeEditorView>,
}

impl InputFormView {
    pub fn field(&self, id: FieldId) -> Option<&FieldView> {
        self.left_pane.iter().find_map(|group| group.fields.get(&id))
    }

    pub fn visible_field_ids(&self) -> Vec<FieldId> {
        self.left_pane
            .iter()
            .flat_map(|group| group.fields.keys().copied())
            .collect()
    }
}

pub fn resolve_view(ctx: &InputFormContext<'_>) -> InputFormView {
    let left_pane = match ctx.input.mode {
        InputMode::Batching => batching_pane(ctx),
        InputMode::Streaming => streaming_pane(ctx),
    };

    InputFormView {
        left_pane,
        schema_pane: schema_pane(ctx),
        get_schema_enabled: schema::can_fetch_schema(
            ctx.input,
            ctx.batch_inputs,
            ctx.selected_batch_input,
            ctx.fetching_input_schema,
            ctx.capabilities.get_schema_button,
        ),
        sampling: sampling_view(ctx),
        normalization: normalization_view(ctx),
    }
}

fn group(id: &'static str, fields: Vec<FieldView>) -> FieldGroup {
    FieldGroup {
        id,
        fields: fields.into_iter().map(|field| (field.id, field)).collect(),
    }
}

fn mode_field(ctx: &InputFormContext<'_>) -> FieldView {
    FieldView::new(
        FieldId::Mode,
        Some(MODE_LABEL),
        Control::Dropdown {
            options: resolver::mode_options(),
            selected: Some(ctx.input.mode.to_string()),
        },
    )
    .enabled(ctx.capabilities.mode_dropdown)
}

fn type_field(ctx: &InputFormContext<'_>) -> FieldView {
    FieldView::new(
        FieldId::Type,
        Some(TYPE_LABEL),
        Control::Dropdown {
            options: resolver::type_options(ctx.input.mode, ctx.local_one_box),
            selected: Some(ctx.input.input_type.to_string()),
        },
    )
    .enabled(ctx.capabilities.type_dropdown)
}

fn toggle_field(ctx: &InputFormContext<'_>) -> FieldView {
    FieldView::new(
        FieldId::ShowNormalization,
        Some(SHOW_NORMALIZATION_LABEL),
        Control::Toggle {
            on: ctx.settings.show_normalization(),
        },
    )
}

fn text(value: &str) -> Control {
    Control::Text {
        value: Some(value.to_string()),
        masked: false,
        placeholder: None,
    }
}

fn masked(value: Option<String>, placeholder: Option<&'static str>) -> Control {
    Control::Text {
        value,
        masked: true,
        placeholder,
    }
}

fn streaming_pane(ctx: &InputFormContext<'_>) -> Vec<FieldGroup> {
    let props = &ctx.input.properties;
    let input_type = ctx.input.input_type;

    let mut source = vec![mode_field(ctx), type_field(ctx)];
    if input_type != InputType::Events && input_type != InputType::Local {
        source.push(
            FieldView::new(
                FieldId::HubName,
                Some(hub_name_label(input_type)),
                text(&props.input_eventhub_name),
            )
            .enabled(ctx.capabilities.hub_name),
        );
    }
    if input_type != InputType::Local {
        source.push(
            FieldView::new(
                FieldId::HubConnection,
                Some(hub_connection_label(input_type)),
                masked(Some(props.input_eventhub_connection.clone()), None),
            )
            .enabled(ctx.capabilities.hub_connection),
        );
    }
    if matches!(input_type, InputType::Events | InputType::Iothub) {
        // Both credential fields follow the connection-string flag.
        source.push(
            FieldView::new(
                FieldId::SubscriptionId,
                Some(SUBSCRIPTION_ID_LABEL),
                masked(
                    Some(props.input_subscription_id.clone()),
                    Some(USE_DEFAULT_PLACEHOLDER),
                ),
            )
            .enabled(ctx.capabilities.hub_connection),
        );
        source.push(
            FieldView::new(
                FieldId::ResourceGroup,
                Some(RESOURCE_GROUP_LABEL),
                masked(
                    Some(props.input_resource_group.clone()),
                    Some(USE_DEFAULT_PLACEHOLDER),
                ),
            )
            .enabled(ctx.capabilities.hub_connection),
        );
    }

    let throughput = vec![
        FieldView::new(
            FieldId::WindowDuration,
            Some(WINDOW_DURATION_LABEL),
            text(&props.window_duration),
        )
        .enabled(ctx.capabilities.window_duration)
        .error(validate_number(&props.window_duration)),
        FieldView::new(FieldId::MaxRate, Some(MAX_RATE_LABEL), text(&props.max_rate))
            .enabled(ctx.capabilities.max_rate)
            .error(validate_number(&props.max_rate)),
        FieldView::new(
            FieldId::TimestampColumn,
            Some(TIMESTAMP_COLUMN_LABEL),
            text(&props.timestamp_column),
        )
        .enabled(ctx.capabilities.timestamp_column),
        FieldView::new(
            FieldId::WatermarkValue,
            Some(WATERMARK_LABEL),
            text(&props.watermark_value),
        )
        .enabled(ctx.capabilities.watermark)
        .error(validate_watermark_value(&props.watermark_value)),
        FieldView::new(
            FieldId::WatermarkUnit,
            None,
            Control::Dropdown {
                options: WATERMARK_UNITS.iter().map(ChoiceView::from_entry).collect(),
                selected: Some(props.watermark_unit.to_string()),
            },
        )
        .enabled(ctx.capabilities.watermark),
    ];

    vec![
        group("source", source),
        group("throughput", throughput),
        group("normalization", vec![toggle_field(ctx)]),
    ]
}

fn batching_pane(ctx: &InputFormContext<'_>) -> Vec<FieldGroup> {
    let batch = ctx
        .selected_batch_input
        .and_then(|index| ctx.batch_inputs.get(index));

    let mut source = vec![mode_field(ctx), type_field(ctx)];
    if ctx.input.input_type == InputType::Blob {
        source.push(
            FieldView::new(
                FieldId::BlobConnection,
                Some(BLOB_CONNECTION_LABEL),
                masked(batch.map(|b| b.properties.connection.clone()), None),
            )
            .enabled(ctx.capabilities.hub_connection),
        );
        source.push(FieldView::new(
            FieldId::BlobPath,
            Some(BLOB_PATH_LABEL),
            masked(
                batch.map(|b| b.properties.path.clone()),
                Some(BLOB_PATH_PLACEHOLDER),
            ),
        ));
        source.push(FieldView::new(
            FieldId::FormatType,
            Some(FORMAT_LABEL),
            Control::Dropdown {
                options: INPUT_FORMAT_TYPES.iter().map(ChoiceView::from_entry).collect(),
                selected: Some(
                    batch
                        .map(|b| b.properties.format_type)
                        .unwrap_or(FormatType::Json)
                        .to_string(),
                ),
            },
        ));
        source.push(FieldView::new(
            FieldId::CompressionType,
            Some(COMPRESSION_LABEL),
            Control::Dropdown {
                options: INPUT_COMPRESSION_TYPES
                    .iter()
                    .map(ChoiceView::from_entry)
                    .collect(),
                selected: Some(
                    batch
                        .map(|b| b.properties.compression_type)
                        .unwrap_or(CompressionType::None)
                        .to_string(),
                ),
            },
        ));
    }

    vec![
        group("source", source),
        group("normalization", vec![toggle_field(ctx)]),
    ]
}

fn schema_pane(ctx: &InputFormContext<'_>) -> SchemaPane {
    if ctx.fetching_input_schema {
        return SchemaPane::Loading {
            message: schema::fetch_progress_label(
                ctx.input.mode,
                ctx.sampling_input_duration,
                ctx.timer,
            ),
        };
    }

    let (mode, allowed_modes): (EditorMode, &'static [EditorMode]) =
        if ctx.capabilities.schema_editor {
            (EditorMode::Code, &[EditorMode::Code, EditorMode::Tree])
        } else {
            (EditorMode::View, &[EditorMode::View])
        };

    SchemaPane::Editor(SchemaEditorView {
        value: schema::display_value(
            &ctx.input.properties.input_schema_file,
            ctx.settings.fetch_error(),
        ),
        mode,
        allowed_modes,
        example_wiki: schema::INPUT_SCHEMA_EXAMPLE_WIKI,
    })
}

fn sampling_view(ctx: &InputFormContext<'_>) -> SamplingView {
    match ctx.input.mode {
        InputMode::Streaming => SamplingView::Duration {
            value: ctx.sampling_input_duration.to_string(),
            error: validate_number(ctx.sampling_input_duration),
        },
        InputMode::Batching => SamplingView::BlobNote {
            message: BLOB_SAMPLING_NOTE,
        },
    }
}

fn normalization_view(ctx: &InputFormContext<'_>) -> Option<CodeEditorView> {
    if !ctx.settings.show_normalization() {
        return None;
    }
    Some(CodeEditorView {
        language: "sql",
        text: ctx.input.properties.normalization_snippet.clone(),
        read_only: !ctx.capabilities.normalization_editor,
        example_wiki: schema::NORMALIZATION_EXAMPLE_WIKI,
    })
}
