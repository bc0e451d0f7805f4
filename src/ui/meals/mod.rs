//! Meal list screen state.
//!
//! - `state.rs` - Loading → Loaded / Failed
//! - `intent.rs` - SnapshotPublished, FetchFailed
//! - `reducer.rs` - transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::MealScreenIntent;
pub use reducer::MealScreenReducer;
pub use state::MealScreenState;
