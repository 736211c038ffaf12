//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// States are replaced, never mutated in place by the view, and carry
/// everything needed to render a frame.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
