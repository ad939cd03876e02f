//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_check_result, print_grid, print_grid_report, print_round_summary, print_session_stats,
    print_solutions, print_verdict,
};
