//! Meal records as returned by TheMealDB search endpoint.

mod types;

pub use types::{MealCollection, MealRecord};
