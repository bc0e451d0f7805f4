//! Intents for the meal list screen.

use std::sync::Arc;

use crate::meal::MealCollection;
use crate::ui::mvi::Intent;

#[derive(Debug)]
pub enum MealScreenIntent {
    /// The snapshot cell was replaced.
    SnapshotPublished(Arc<MealCollection>),

    /// A fetch ended in an error. The snapshot cell is untouched.
    FetchFailed { reason: String },
}

impl Intent for MealScreenIntent {}
