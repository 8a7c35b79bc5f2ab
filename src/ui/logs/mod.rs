//! Logs screen: filterable list of log entries.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Entries, filter and scroll position
//! - `intent.rs` - Filter edits, toggles, scrolling, new entries
//! - `reducer.rs` - State transitions
//! - `view.rs` - Rendering

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::LogsIntent;
pub use reducer::LogsReducer;
pub use state::{FilterField, LogFilter, LogsState};
pub use view::render_logs;
