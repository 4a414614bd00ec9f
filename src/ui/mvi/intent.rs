/// Marker for events a reducer understands: key presses routed by the app,
/// completion of the in-flight call, timer ticks.
pub trait Intent: Send + 'static {}
