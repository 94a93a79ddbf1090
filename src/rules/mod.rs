//! Game rules for tic-tac-toe
//!
//! This module implements the rule set:
//! - Win detection over the 8 fixed lines
//! - Outcome (win / draw / in progress)
//! - Reachability of a position from alternating play

pub mod outcome;
pub mod validity;
pub mod win;

// Re-exports for convenient access
pub use outcome::{is_full, outcome, Outcome};
pub use validity::{is_reachable_counts, side_to_move};
pub use win::{has_three_in_row, winner, winning_line, LINES};
