//! Marker trait for renderable state.

/// State the view renders from. Cloned and compared to detect changes;
/// `Default` is the state before anything has happened.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
