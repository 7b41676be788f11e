use flowinput::domain::{BatchInput, InputEntity, InputMode, InputType};
use flowinput::form::{
    Capabilities, Control, FieldId, InputFormContext, InputFormView, SettingsState, resolve_view,
};
use serde_json::json;

fn batch(connection: &str, path: &str) -> BatchInput {
    serde_json::from_value(json!({
        "properties": {
            "connection": connection,
            "path": path,
            "formatType": "csv",
            "compressionType": "gzip"
        }
    }))
    .expect("valid batch document")
}

fn resolve_batching(batch_inputs: &[BatchInput], selected: Option<usize>) -> InputFormView {
    let input = InputEntity::new(InputMode::Batching, InputType::Blob);
    let capabilities = Capabilities::all_enabled();
    let settings = SettingsState::new();
    resolve_view(&InputFormContext {
        input: &input,
        batch_inputs,
        selected_batch_input: selected,
        local_one_box: false,
        capabilities: &capabilities,
        fetching_input_schema: false,
        sampling_input_duration: "60",
        timer: 0,
        settings: &settings,
    })
}

fn text_value(view: &InputFormView, id: FieldId) -> Option<String> {
    match &view.field(id).expect("visible").control {
        Control::Text { value, .. } => value.clone(),
        other => panic!("expected a text control for {id:?}, got {other:?}"),
    }
}

fn selected_key(view: &InputFormView, id: FieldId) -> Option<String> {
    match &view.field(id).expect("visible").control {
        Control::Dropdown { selected, .. } => selected.clone(),
        other => panic!("expected a dropdown for {id:?}, got {other:?}"),
    }
}

#[test]
fn selected_batch_input_fills_the_blob_fields() {
    let batches = [batch("wasbs://container@acct", "/events/{yyyy-MM-dd}")];
    let view = resolve_batching(&batches, Some(0));

    assert_eq!(
        text_value(&view, FieldId::BlobConnection),
        Some("wasbs://container@acct".to_string())
    );
    assert_eq!(
        text_value(&view, FieldId::BlobPath),
        Some("/events/{yyyy-MM-dd}".to_string())
    );
    assert_eq!(selected_key(&view, FieldId::FormatType), Some("csv".to_string()));
    assert_eq!(
        selected_key(&view, FieldId::CompressionType),
        Some("gzip".to_string())
    );
}

#[test]
fn no_selection_renders_empty_fields_with_catalog_defaults() {
    let batches = [batch("wasbs://container@acct", "/events")];
    let view = resolve_batching(&batches, None);

    assert_eq!(text_value(&view, FieldId::BlobConnection), None);
    assert_eq!(text_value(&view, FieldId::BlobPath), None);
    assert_eq!(selected_key(&view, FieldId::FormatType), Some("json".to_string()));
    assert_eq!(
        selected_key(&view, FieldId::CompressionType),
        Some("none".to_string())
    );
}

#[test]
fn out_of_range_selection_behaves_like_no_selection() {
    let batches = [batch("wasbs://container@acct", "/events")];
    let view = resolve_batching(&batches, Some(7));
    assert_eq!(text_value(&view, FieldId::BlobConnection), None);
    assert!(!view.get_schema_enabled);
}

#[test]
fn non_blob_batching_shows_only_the_dropdown_pair() {
    let input = InputEntity::new(InputMode::Batching, InputType::Local);
    let capabilities = Capabilities::all_enabled();
    let settings = SettingsState::new();
    let view = resolve_view(&InputFormContext {
        input: &input,
        batch_inputs: &[],
        selected_batch_input: None,
        local_one_box: false,
        capabilities: &capabilities,
        fetching_input_schema: false,
        sampling_input_duration: "60",
        timer: 0,
        settings: &settings,
    });
    assert!(view.field(FieldId::BlobConnection).is_none());
    assert!(view.field(FieldId::BlobPath).is_none());
    assert!(view.field(FieldId::Mode).is_some());
    assert!(view.field(FieldId::ShowNormalization).is_some());
}
