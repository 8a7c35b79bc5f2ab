use crate::config::{LogRecord, Severity};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogsIntent {
    /// New entry produced while the app runs.
    Append(LogRecord),

    ToggleSeverity(Severity),
    ToggleCommandsOnly,

    FocusNext,
    FocusPrev,

    /// Typed character for the focused filter input.
    InsertChar(char),
    DeleteChar,

    /// Back to the default filter.
    ClearFilter,

    ScrollUp,
    ScrollDown,
}

impl Intent for LogsIntent {}
