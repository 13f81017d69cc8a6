//! Marker trait for component state.

/// Component state handled by a [`Reducer`](super::Reducer).
///
/// Cheap to clone and comparable so tests can assert on transitions.
/// `Default` is the state a freshly mounted component starts in.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
