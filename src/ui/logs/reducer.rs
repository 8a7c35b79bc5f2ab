use crate::ui::mvi::Reducer;

use super::intent::LogsIntent;
use super::state::{FilterField, LogFilter, LogsState, DATE_INPUT_LEN};

pub struct LogsReducer;

impl Reducer for LogsReducer {
    type State = LogsState;
    type Intent = LogsIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LogsIntent::Append(entry) => {
                state.entries.push(entry);
            }

            LogsIntent::ToggleSeverity(severity) => {
                if !state.filter.severities.remove(&severity) {
                    state.filter.severities.insert(severity);
                }
                state.scroll = 0;
            }

            LogsIntent::ToggleCommandsOnly => {
                state.filter.commands_only = !state.filter.commands_only;
                state.scroll = 0;
            }

            LogsIntent::FocusNext => state.focused = state.focused.next(),
            LogsIntent::FocusPrev => state.focused = state.focused.prev(),

            LogsIntent::InsertChar(ch) => {
                let focused = state.focused;
                let text = state.filter.text_mut(focused);
                let accepted = match focused {
                    FilterField::Keywords => !ch.is_control(),
                    FilterField::DateFrom | FilterField::DateTo => {
                        (ch.is_ascii_digit() || ch == '-') && text.len() < DATE_INPUT_LEN
                    }
                };
                if accepted {
                    text.push(ch);
                    state.scroll = 0;
                }
            }

            LogsIntent::DeleteChar => {
                let focused = state.focused;
                if state.filter.text_mut(focused).pop().is_some() {
                    state.scroll = 0;
                }
            }

            LogsIntent::ClearFilter => {
                state.filter = LogFilter::default();
                state.scroll = 0;
            }

            LogsIntent::ScrollUp => {
                state.scroll = state.scroll.saturating_sub(1);
            }

            LogsIntent::ScrollDown => {
                let last = state.visible().len().saturating_sub(1);
                state.scroll = (state.scroll + 1).min(last);
            }
        }
        state
    }
}
