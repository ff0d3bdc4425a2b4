//! Game rules for Renju
//!
//! This module implements the rule set on top of the bare board:
//! - Run counting along the four axes
//! - Win conditions (five or more in a row)
//! - Forbidden moves for the first player (double-three, double-four, overline)

pub mod forbidden;
pub mod win;

// Re-exports for convenient access
pub use forbidden::{forbidden_pattern, is_double_four, is_double_three, is_overline};
pub use win::{count_runs, has_five_at_pos, run_length, scan_for_five, winning_line, FIVE};
