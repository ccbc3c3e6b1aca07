//! Base trait for store state in MVI architecture.

/// Marker trait for state objects.
///
/// States should be:
/// - Cheap to replace (reducers take and return them by value)
/// - Self-contained (all data a screen needs to render)
/// - Comparable (PartialEq for detecting changes)
pub trait StoreState: Clone + PartialEq + Default + Send + Sync + 'static {}
