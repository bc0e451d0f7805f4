//! State for the meal list screen.

use std::sync::Arc;

use crate::meal::{MealCollection, MealRecord};
use crate::ui::mvi::UiState;

/// Meal list screen state machine.
///
/// Tracks where the single fetch stands: nothing received yet → a snapshot
/// received → the last fetch failed before any snapshot arrived.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum MealScreenState {
    /// Waiting for the first snapshot.
    #[default]
    Loading,

    /// A snapshot has been published. May be empty.
    Loaded { meals: Arc<MealCollection> },

    /// Fetch failed and nothing was ever loaded.
    Failed { reason: String },
}

impl UiState for MealScreenState {}

impl MealScreenState {
    /// Records to render; empty unless loaded.
    pub fn items(&self) -> &[MealRecord] {
        match self {
            Self::Loaded { meals } => meals.items(),
            Self::Loading | Self::Failed { .. } => &[],
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}
