//! Command implementations

pub mod check;
pub mod grid;
pub mod simple;
pub mod solutions;
pub mod survey;

pub use check::{CheckResult, check_word};
pub use grid::{GridReport, generate_grid};
pub use simple::run_simple;
pub use solutions::{SolutionsResult, solve_grid};
pub use survey::{SurveyStatistics, print_survey_statistics, run_survey};
