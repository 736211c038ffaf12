//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - Operator actions (key presses on the form)
/// - Results of async work (detail loaded, update finished)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
