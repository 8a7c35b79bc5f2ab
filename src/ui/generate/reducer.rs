//! Reducer for the generate dialog.

use crate::command::render_preview;
use crate::ui::layout::ClickTarget;
use crate::ui::mvi::Reducer;

use super::intent::GenerateIntent;
use super::state::{FormField, GenerateDialogState, Visibility, EXECUTING_MESSAGE};

pub struct GenerateReducer;

impl Reducer for GenerateReducer {
    type State = GenerateDialogState;
    type Intent = GenerateIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            GenerateIntent::Open => {
                state.visibility = Visibility::Visible;
            }

            GenerateIntent::Close => {
                state.visibility = Visibility::Hidden;
            }

            GenerateIntent::PointerDown { target } => match target {
                // Only the overlay itself closes, never the content inside it.
                ClickTarget::Overlay | ClickTarget::CloseButton => {
                    state.visibility = Visibility::Hidden;
                }
                ClickTarget::Field(field) => state.focused = field,
                ClickTarget::ReloadButton => refresh_preview(&mut state),
                ClickTarget::Content
                | ClickTarget::SubmitButton
                | ClickTarget::OpenTrigger
                | ClickTarget::TableRow(_)
                | ClickTarget::Nothing => {}
            },

            GenerateIntent::FocusNext => state.focused = state.focused.next(),
            GenerateIntent::FocusPrev => state.focused = state.focused.prev(),
            GenerateIntent::Focus(field) => state.focused = field,

            GenerateIntent::InsertChar(ch) => match state.focused {
                FormField::KeyName if !ch.is_control() => state.form.key_name.push(ch),
                // Numeric input: digits only
                FormField::Duration if ch.is_ascii_digit() => state.form.duration.push(ch),
                _ => {}
            },

            GenerateIntent::DeleteChar => match state.focused {
                FormField::KeyName => {
                    state.form.key_name.pop();
                }
                FormField::Duration => {
                    state.form.duration.pop();
                }
                FormField::KeyType | FormField::DurationUnit => {}
            },

            GenerateIntent::CycleChoice { forward } => match state.focused {
                FormField::KeyType => state.form.key_type.cycle(forward),
                FormField::DurationUnit => state.form.duration_unit.cycle(forward),
                FormField::KeyName | FormField::Duration => {}
            },

            GenerateIntent::ReloadPreview => refresh_preview(&mut state),

            GenerateIntent::SubmitStarted => {
                refresh_preview(&mut state);
                state.status_log = vec![EXECUTING_MESSAGE.to_string()];
            }

            GenerateIntent::SubmissionFinished { message } => {
                state.status_log.push(message);
            }
        }
        state
    }
}

fn refresh_preview(state: &mut GenerateDialogState) {
    state.preview = render_preview(&state.form.snapshot());
}
