//! Terminal front end: wires stdin, the core state machine and the engine together.
mod app;
pub mod cli;
mod config;
mod effects;
mod logging;
mod ui;

pub use app::run_app;
