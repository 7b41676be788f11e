use flowinput::domain::{InputEntity, InputMode, InputType};
use flowinput::form::{
    Capabilities, FieldId, InputFormContext, InputFormView, SamplingView, SchemaPane,
    SettingsState, resolve_view,
};

fn resolve(input: &InputEntity, capabilities: &Capabilities, settings: &SettingsState) -> InputFormView {
    resolve_view(&InputFormContext {
        input,
        batch_inputs: &[],
        selected_batch_input: None,
        local_one_box: false,
        capabilities,
        fetching_input_schema: false,
        sampling_input_duration: "60",
        timer: 0,
        settings,
    })
}

fn expected_fields(mode: InputMode, input_type: InputType) -> Vec<FieldId> {
    use FieldId::*;
    match mode {
        InputMode::Streaming => {
            let mut fields = vec![Mode, Type];
            if input_type != InputType::Events && input_type != InputType::Local {
                fields.push(HubName);
            }
            if input_type != InputType::Local {
                fields.push(HubConnection);
            }
            if matches!(input_type, InputType::Events | InputType::Iothub) {
                fields.push(SubscriptionId);
                fields.push(ResourceGroup);
            }
            fields.extend([
                WindowDuration,
                MaxRate,
                TimestampColumn,
                WatermarkValue,
                WatermarkUnit,
                ShowNormalization,
            ]);
            fields
        }
        InputMode::Batching => {
            let mut fields = vec![Mode, Type];
            if input_type == InputType::Blob {
                fields.extend([BlobConnection, BlobPath, FormatType, CompressionType]);
            }
            fields.push(ShowNormalization);
            fields
        }
    }
}

const ALL_TYPES: [InputType; 6] = [
    InputType::Local,
    InputType::Blob,
    InputType::Events,
    InputType::Iothub,
    InputType::Kafka,
    InputType::Kafkaeventhub,
];

#[test]
fn applicable_field_sets_cover_every_mode_type_pair() {
    let capabilities = Capabilities::all_enabled();
    let settings = SettingsState::new();
    for mode in [InputMode::Streaming, InputMode::Batching] {
        for input_type in ALL_TYPES {
            let input = InputEntity::new(mode, input_type);
            let view = resolve(&input, &capabilities, &settings);
            assert_eq!(
                view.visible_field_ids(),
                expected_fields(mode, input_type),
                "unexpected field set for {mode}/{input_type}"
            );
        }
    }
}

#[test]
fn local_one_box_restricts_the_type_dropdown_everywhere() {
    let capabilities = Capabilities::all_enabled();
    let settings = SettingsState::new();
    for mode in [InputMode::Streaming, InputMode::Batching] {
        let input = InputEntity::new(mode, InputType::Local);
        let view = resolve_view(&InputFormContext {
            input: &input,
            batch_inputs: &[],
            selected_batch_input: None,
            local_one_box: true,
            capabilities: &capabilities,
            fetching_input_schema: false,
            sampling_input_duration: "60",
            timer: 0,
            settings: &settings,
        });
        let type_field = view.field(FieldId::Type).expect("type dropdown");
        match &type_field.control {
            flowinput::form::Control::Dropdown { options, .. } => {
                let keys: Vec<&str> = options.iter().map(|o| o.key.as_str()).collect();
                assert_eq!(keys, ["local"], "one-box must force local for {mode}");
            }
            other => panic!("type field is not a dropdown: {other:?}"),
        }
    }
}

#[test]
fn hub_connection_labels_follow_the_source_technology() {
    let cases = [
        (InputType::Iothub, "Event Hub-Compatible Endpoint"),
        (
            InputType::Kafka,
            "Bootstrap Servers (Use commas to separate server IPs/URLs)",
        ),
        (InputType::Kafkaeventhub, "Event Hub Namespace Connection String"),
        (InputType::Blob, "Blob Connection String"),
        (InputType::Events, "Connection String"),
    ];
    let capabilities = Capabilities::all_enabled();
    let settings = SettingsState::new();
    for (input_type, label) in cases {
        let input = InputEntity::new(InputMode::Streaming, input_type);
        let view = resolve(&input, &capabilities, &settings);
        let field = view.field(FieldId::HubConnection).expect("visible");
        assert_eq!(field.label, Some(label));
    }
}

#[test]
fn get_schema_button_follows_connection_fetching_and_capability() {
    let settings = SettingsState::new();
    let capabilities = Capabilities::all_enabled();
    let mut input = InputEntity::new(InputMode::Streaming, InputType::Events);

    let view = resolve(&input, &capabilities, &settings);
    assert!(!view.get_schema_enabled, "no connection string yet");

    input.properties.input_eventhub_connection = "Endpoint=sb://ns/;SharedAccessKey=abc".into();
    let view = resolve(&input, &capabilities, &settings);
    assert!(view.get_schema_enabled);

    let view = resolve_view(&InputFormContext {
        input: &input,
        batch_inputs: &[],
        selected_batch_input: None,
        local_one_box: false,
        capabilities: &capabilities,
        fetching_input_schema: true,
        sampling_input_duration: "60",
        timer: 0,
        settings: &settings,
    });
    assert!(!view.get_schema_enabled, "disabled while a fetch is in flight");

    let locked = Capabilities::locked();
    let view = resolve(&input, &locked, &settings);
    assert!(!view.get_schema_enabled, "capability flag wins");
}

#[test]
fn failed_fetch_shows_the_error_document_until_a_schema_arrives() {
    let capabilities = Capabilities::all_enabled();
    let mut settings = SettingsState::new();
    let mut input = InputEntity::new(InputMode::Streaming, InputType::Events);

    settings.complete_schema_fetch(Err(flowinput::SchemaFetchError::new("timeout")));
    let view = resolve(&input, &capabilities, &settings);
    match view.schema_pane {
        SchemaPane::Editor(editor) => {
            assert_eq!(editor.value, serde_json::json!({"Error": "timeout"}));
        }
        SchemaPane::Loading { .. } => panic!("expected the editor"),
    }

    // A manual schema edit displaces the error display.
    input.properties.input_schema_file = r#"{"columns":[]}"#.into();
    let view = resolve(&input, &capabilities, &settings);
    match view.schema_pane {
        SchemaPane::Editor(editor) => {
            assert_eq!(editor.value, serde_json::json!({"columns": []}));
        }
        SchemaPane::Loading { .. } => panic!("expected the editor"),
    }

    // So does a successful fetch completion.
    settings.complete_schema_fetch(Ok(()));
    input.properties.input_schema_file = "{}".into();
    let view = resolve(&input, &capabilities, &settings);
    match view.schema_pane {
        SchemaPane::Editor(editor) => assert_eq!(editor.value, serde_json::json!({})),
        SchemaPane::Loading { .. } => panic!("expected the editor"),
    }
}

#[test]
fn sampling_section_depends_on_mode() {
    let capabilities = Capabilities::all_enabled();
    let settings = SettingsState::new();

    let streaming = InputEntity::new(InputMode::Streaming, InputType::Events);
    match resolve(&streaming, &capabilities, &settings).sampling {
        SamplingView::Duration { value, error } => {
            assert_eq!(value, "60");
            assert_eq!(error, "");
        }
        SamplingView::BlobNote { .. } => panic!("streaming samples by duration"),
    }

    let batching = InputEntity::new(InputMode::Batching, InputType::Blob);
    match resolve(&batching, &capabilities, &settings).sampling {
        SamplingView::BlobNote { message } => {
            assert_eq!(
                message,
                "Sampling from the last 3 blobs based on the last modified time."
            );
        }
        SamplingView::Duration { .. } => panic!("batching samples recent blobs"),
    }
}

#[test]
fn numeric_fields_surface_advisory_errors_without_blocking() {
    let capabilities = Capabilities::all_enabled();
    let settings = SettingsState::new();
    let mut input = InputEntity::new(InputMode::Streaming, InputType::Events);
    input.properties.window_duration = "abc".into();
    input.properties.max_rate = "100".into();
    input.properties.watermark_value = "".into();

    let view = resolve(&input, &capabilities, &settings);
    assert_eq!(
        view.field(FieldId::WindowDuration).expect("visible").error,
        "Numbers only and must be greater than zero"
    );
    assert_eq!(view.field(FieldId::MaxRate).expect("visible").error, "");
    assert_eq!(
        view.field(FieldId::WatermarkValue).expect("visible").error,
        "Numbers only and must be zero or greater"
    );
}
