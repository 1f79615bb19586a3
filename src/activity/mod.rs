//! Activity tracking for the current session
//!
//! - `ActivityLog`: ordered, in-memory record of completed operations.
//! - `ActivityReport`: frequency summary computed over the log.

mod log;
mod report;

pub use log::{operation_key, ActivityEntry, ActivityLog};
pub use report::{count_operations, most_frequent, ActivityReport, OperationCount};
