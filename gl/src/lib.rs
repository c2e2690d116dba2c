//! GoalList - single-screen terminal goal list
//!
//! Type a goal, press Enter (or click ADD) to append it to the list, click a
//! row (or select it and press `d`) to remove it after confirming.
//!
//! # Modules
//!
//! - [`tui`] - screen state, event handling, rendering and the main loop
//! - [`config`] - Configuration types and loading
//! - [`cli`] - Command-line interface
//!
//! Goal records and their add/remove transitions live in the `goalstore`
//! crate.

pub mod cli;
pub mod config;
pub mod tui;

pub use config::Config;
pub use goalstore::{Goal, GoalError, GoalId, GoalStore, TextMode};
