//! Audit entry data structures
//!
//! Defines the operation types and the entry format written to the audit log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::User;
use crate::storage::record::format_amount;

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// User was created
    Create,
    /// User amounts were updated
    Update,
    /// User was deleted
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// A single audit log entry
///
/// Records one mutation of a user with before/after snapshots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// Email of the affected user
    pub email: String,

    /// User before the operation (updates and deletes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<User>,

    /// User after the operation (creates and updates)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<User>,

    /// Human-readable change summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    /// Create a new audit entry for a create operation
    pub fn create(user: &User) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            email: user.email.clone(),
            before: None,
            after: Some(user.clone()),
            diff_summary: None,
        }
    }

    /// Create a new audit entry for an update operation
    pub fn update(before: &User, after: &User) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Update,
            email: after.email.clone(),
            before: Some(before.clone()),
            after: Some(after.clone()),
            diff_summary: describe_changes(before, after),
        }
    }

    /// Create a new audit entry for a delete operation
    pub fn delete(user: &User) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Delete,
            email: user.email.clone(),
            before: Some(user.clone()),
            after: None,
            diff_summary: None,
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} User {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.email
        );

        if let Some(name) = self.after.as_ref().or(self.before.as_ref()).map(|u| &u.name) {
            output.push_str(&format!(" ({})", name));
        }

        if let Some(diff) = &self.diff_summary {
            output.push_str(&format!("\n  Changes: {}", diff));
        }

        output
    }
}

/// Summarize which amounts changed between two versions of a user
pub fn describe_changes(before: &User, after: &User) -> Option<String> {
    let changes: Vec<String> = [
        ("income", before.income, after.income),
        ("expenses", before.expenses, after.expenses),
        ("savings_goal", before.savings_goal, after.savings_goal),
    ]
    .into_iter()
    .filter(|(_, old, new)| old != new)
    .map(|(field, old, new)| {
        format!("{}: {} -> {}", field, format_amount(old), format_amount(new))
    })
    .collect();

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}
