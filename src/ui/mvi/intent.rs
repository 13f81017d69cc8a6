//! Marker trait for intents.

/// Something that happened and may change a component's state:
/// a key press routed to the component, or the result of a submission.
pub trait Intent: Send + 'static {}
