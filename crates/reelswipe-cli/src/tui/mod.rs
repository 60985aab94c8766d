//! TUI module for the swipe deck.
//!
//! Uses `ratatui` + `crossterm` for rendering.

mod gesture;
/// Swipe deck state types.
pub mod state;
mod swipe_deck;
mod ui;

pub use swipe_deck::run_swipe_deck;
