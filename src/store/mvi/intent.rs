//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - An operation being issued (a request id was allocated)
/// - A network call completing, successfully or not
/// - Synchronous edits such as inserting a freshly published article
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
