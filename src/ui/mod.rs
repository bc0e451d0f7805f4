//! Terminal rendering of the meal screen.

pub mod app;
pub mod card;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod list;
pub mod meals;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod spinner;
pub mod terminal_guard;
pub mod theme;
pub mod view;

pub use runtime::run;
