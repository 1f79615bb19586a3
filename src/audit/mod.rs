//! Audit logging for the budget planner
//!
//! Records every create, update and delete with before/after snapshots in an
//! append-only JSONL file. Unlike the session activity log, the audit trail
//! survives restarts.

mod entry;
mod logger;

pub use entry::{describe_changes, AuditEntry, Operation};
pub use logger::AuditLogger;
