//! Intents for the generate dialog.

use crate::ui::layout::ClickTarget;
use crate::ui::mvi::Intent;

use super::state::FormField;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateIntent {
    /// Show the dialog.
    Open,

    /// Hide the dialog.
    Close,

    /// Mouse button pressed on a dialog element.
    PointerDown { target: ClickTarget },

    FocusNext,
    FocusPrev,
    Focus(FormField),

    /// Typed character for the focused text field.
    InsertChar(char),

    /// Backspace in the focused text field.
    DeleteChar,

    /// Step the focused choice field forward or backward.
    CycleChoice { forward: bool },

    /// Recompute the command preview from the current fields.
    ReloadPreview,

    /// A submission was scheduled.
    SubmitStarted,

    /// A scheduled submission reported back.
    SubmissionFinished { message: String },
}

impl Intent for GenerateIntent {}
