//! Generate-certificate dialog.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Dialog visibility, form fields, preview and status log
//! - `intent.rs` - User/system actions
//! - `reducer.rs` - State transitions
//! - `dialog.rs` - Rendering
//!
//! Scheduling the mock submission is a side effect and lives in
//! [`crate::ui::app::App`]; the reducer only records its start and result.

mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::render_generate_dialog;
pub use intent::GenerateIntent;
pub use reducer::GenerateReducer;
pub use state::{
    ChoiceField, FormField, GenerateDialogState, GenerateForm, Visibility, EXECUTING_MESSAGE,
};
