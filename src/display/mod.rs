//! Display formatting for terminal output
//!
//! Provides utilities for formatting users, savings projections and the
//! activity report for terminal display.

pub mod report;
pub mod user;

pub use report::{format_activity_report, format_amount};
pub use user::{format_savings_outcome, format_user_list};
