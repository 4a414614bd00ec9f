//! Lifecycle of one submit-to-result cycle.
//!
//! - `state.rs` - `RequestState` tagged union
//! - `intent.rs` - submit / completion / tick
//! - `reducer.rs` - transitions

mod intent;
mod reducer;
mod state;

pub use intent::RequestIntent;
pub use reducer::RequestReducer;
pub use state::RequestState;
