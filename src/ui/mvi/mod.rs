//! Model-View-Intent primitives shared by dialog features.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Side effects (scheduling submissions, quitting) stay in
//! [`crate::ui::app::App`]; reducers only describe state changes.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
