/// Marker for reducer-owned state.
///
/// `Default` is the state before anything happened; the app takes it out with
/// `std::mem::take` while reducing, so it must be cheap.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
