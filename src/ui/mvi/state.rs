//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// States should be cheap to clone, self-contained (everything the view
/// needs) and comparable so tests can assert on whole states.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
