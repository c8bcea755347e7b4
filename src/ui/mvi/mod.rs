//! Model-View-Intent primitives shared by the dashboard pages.
//!
//! ```text
//! key / API result ──→ Intent ──→ Reducer ──→ State ──→ draw()
//! ```
//!
//! Reducers are pure. Side effects (API commands, toasts, session writes)
//! are issued by [`App`](crate::ui::app::App) after looking at the new state.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
