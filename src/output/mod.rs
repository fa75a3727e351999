//! Terminal output formatting
//!
//! Display utilities for the line-based front-end and share grids.

pub mod display;
pub mod formatters;

pub use display::{print_game, print_outcome, render_guess, render_keyboard};
