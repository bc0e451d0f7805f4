//! Marker trait for events fed into a reducer.

/// Something that happened: a published snapshot, a failed fetch.
pub trait Intent: Send + 'static {}
