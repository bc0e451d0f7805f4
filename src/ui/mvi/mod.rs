//! Model-View-Intent primitives for the screen.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──── snapshot / fetch events ─┘
//! ```
//!
//! - **State**: what the view renders, replaced on every transition
//! - **Intent**: something that happened (a snapshot arrived, a fetch failed)
//! - **Reducer**: pure `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
