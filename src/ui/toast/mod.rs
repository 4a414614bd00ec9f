//! Transient notification shown after each completed request.
//!
//! Dismisses itself once its deadline passes, or earlier on `Esc`.

mod intent;
mod reducer;
mod state;
mod widget;

pub use intent::ToastIntent;
pub use reducer::ToastReducer;
pub use state::{Severity, ToastState};
pub use widget::render_toast;
