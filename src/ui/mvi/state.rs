/// Marker trait for page state.
///
/// States are cloneable snapshots with a `Default` starting point, so the
/// dispatcher can `mem::take` the current value, reduce it and store the
/// result back.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
