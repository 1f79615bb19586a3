//! Activity report computation
//!
//! Tallies log entries by operation key and finds the keys tied for the
//! highest count.

use super::log::{operation_key, ActivityEntry};

/// Number of times one operation appears in the log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationCount {
    pub operation: String,
    pub count: usize,
}

/// Summary produced by the report operation
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityReport {
    /// Number of stored users
    pub total_users: usize,
    /// Per-operation counts, in order of first appearance
    pub operation_counts: Vec<OperationCount>,
    /// Operations tied for the highest count, in order of first appearance
    pub most_frequent: Vec<String>,
    /// Full log at the time of the report, oldest first
    pub entries: Vec<String>,
}

impl ActivityReport {
    /// Build a report over the given log entries
    pub fn build(total_users: usize, entries: &[ActivityEntry]) -> Self {
        let descriptions: Vec<&str> = entries.iter().map(|e| e.description.as_str()).collect();
        let operation_counts = count_operations(&descriptions);
        let most_frequent = most_frequent(&operation_counts);

        Self {
            total_users,
            operation_counts,
            most_frequent,
            entries: descriptions.into_iter().map(String::from).collect(),
        }
    }

    /// Look up the count for one operation
    pub fn count_for(&self, operation: &str) -> usize {
        self.operation_counts
            .iter()
            .find(|c| c.operation == operation)
            .map(|c| c.count)
            .unwrap_or(0)
    }
}

/// Count descriptions by operation key, keeping first-seen order
pub fn count_operations(descriptions: &[&str]) -> Vec<OperationCount> {
    let mut counts: Vec<OperationCount> = Vec::new();

    for description in descriptions {
        let key = operation_key(description);
        match counts.iter_mut().find(|c| c.operation == key) {
            Some(existing) => existing.count += 1,
            None => counts.push(OperationCount {
                operation: key.to_string(),
                count: 1,
            }),
        }
    }

    counts
}

/// Operations whose count equals the maximum
pub fn most_frequent(counts: &[OperationCount]) -> Vec<String> {
    let Some(max) = counts.iter().map(|c| c.count).max() else {
        return Vec::new();
    };

    counts
        .iter()
        .filter(|c| c.count == max)
        .map(|c| c.operation.clone())
        .collect()
}
