//! Certificate action dialog (view, renew, revoke).
//!
//! Same MVI split as the generate dialog. Renew and revoke show a command
//! preview and go through the same submitter as generate; the App schedules
//! the submission and feeds the result back as an intent.

mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::render_action_dialog;
pub use intent::ActionIntent;
pub use reducer::ActionReducer;
pub use state::{ActionDialogState, ActionView, CertificateAction};
