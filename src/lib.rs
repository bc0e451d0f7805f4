pub mod cli;
pub mod config;
pub mod controller;
pub mod fetch;
pub mod logging;
pub mod meal;
pub mod state;
pub mod ui;
