//! Branch selection for the body of the screen.

use crate::meal::MealRecord;
use crate::ui::meals::MealScreenState;

/// What the body shows for a given state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenBranch<'a> {
    /// Spinner. Used for loading, empty and failed states alike.
    Loading,
    /// Card list over a non-empty slice.
    List(&'a [MealRecord]),
}

/// Pick the body branch. Depends only on whether there is anything to show:
/// a failed fetch keeps the spinner up, with no error message.
pub fn select_branch(state: &MealScreenState) -> ScreenBranch<'_> {
    let items = state.items();
    if items.is_empty() {
        ScreenBranch::Loading
    } else {
        ScreenBranch::List(items)
    }
}
