//! Unidirectional state primitives for the shortener screen.
//!
//! ```text
//! key / completion ──→ Intent ──→ Reducer ──→ State ──→ render
//!        ↑                                              │
//!        └──────────────────────────────────────────────┘
//! ```
//!
//! Every piece of screen state that changes over time (the request lifecycle,
//! the notification) is a `UiState` value replaced wholesale by its reducer.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
