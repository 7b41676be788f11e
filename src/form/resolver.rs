//! Maps the current mode (and the local-one-box deployment flag) to the
//! selectable mode/type option lists. Pure derivation: selection changes are
//! dispatched upward as edits, never applied here.

use crate::domain::{BATCHING_INPUT_TYPES, INPUT_MODES, INPUT_TYPES, InputMode, InputType};

use super::fields::ChoiceView;

pub fn mode_options() -> Vec<ChoiceView> {
    INPUT_MODES.iter().map(ChoiceView::from_entry).collect()
}

/// Selectable types for the current mode. A local-one-box deployment can
/// only read local sources, regardless of mode; streaming offers everything
/// except `local`; batching draws from the batching-capable catalog.
pub fn type_options(mode: InputMode, local_one_box: bool) -> Vec<ChoiceView> {
    if local_one_box {
        INPUT_TYPES
            .iter()
            .filter(|entry| entry.value == InputType::Local)
            .map(ChoiceView::from_entry)
            .collect()
    } else {
        match mode {
            InputMode::Streaming => INPUT_TYPES
                .iter()
                .filter(|entry| entry.value != InputType::Local)
                .map(ChoiceView::from_entry)
                .collect(),
            InputMode::Batching => BATCHING_INPUT_TYPES
                .iter()
                .map(ChoiceView::from_entry)
                .collect(),
        }
    }
}
