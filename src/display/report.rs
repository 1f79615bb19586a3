//! Report formatting for terminal output

use crate::activity::ActivityReport;

/// Format an amount with two decimals
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format the activity report
pub fn format_activity_report(report: &ActivityReport) -> String {
    let mut output = String::new();

    output.push_str("Activity Report\n");
    output.push_str(&separator(40));
    output.push('\n');
    output.push_str(&format!("Total users: {}\n", report.total_users));

    output.push_str("Operation counts:\n");
    if report.operation_counts.is_empty() {
        output.push_str("  (none)\n");
    }
    for count in &report.operation_counts {
        output.push_str(&format!("  {}: {}\n", count.operation, count.count));
    }

    let most_frequent = if report.most_frequent.is_empty() {
        "(none)".to_string()
    } else {
        report.most_frequent.join(", ")
    };
    output.push_str(&format!("Most frequent: {}\n", most_frequent));

    output.push_str("Activity log:\n");
    if report.entries.is_empty() {
        output.push_str("  (empty)\n");
    }
    for entry in &report.entries {
        output.push_str(&format!("- {}\n", entry));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::{count_operations, most_frequent};

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(3000.0), "3000.00");
        assert_eq!(format_amount(12.345), "12.35");
    }

    #[test]
    fn test_format_report() {
        let entries = ["User created: a", "Viewed users", "User created: b"];
        let counts = count_operations(&entries);
        let report = ActivityReport {
            total_users: 2,
            most_frequent: most_frequent(&counts),
            operation_counts: counts,
            entries: entries.iter().map(|e| e.to_string()).collect(),
        };

        let output = format_activity_report(&report);
        assert!(output.contains("Total users: 2\n"));
        assert!(output.contains("  User created: 2\n"));
        assert!(output.contains("  Viewed users: 1\n"));
        assert!(output.contains("Most frequent: User created\n"));
        assert!(output.contains("- User created: a\n- Viewed users\n- User created: b\n"));
    }

    #[test]
    fn test_format_report_ties_joined_by_comma() {
        let entries = ["Viewed users", "Deleted user: a"];
        let counts = count_operations(&entries);
        let report = ActivityReport {
            total_users: 0,
            most_frequent: most_frequent(&counts),
            operation_counts: counts,
            entries: entries.iter().map(|e| e.to_string()).collect(),
        };

        assert!(format_activity_report(&report).contains("Most frequent: Viewed users, Deleted user\n"));
    }

    #[test]
    fn test_format_empty_report() {
        let report = ActivityReport::build(0, &[]);
        let output = format_activity_report(&report);
        assert!(output.contains("Total users: 0\n"));
        assert!(output.contains("Most frequent: (none)\n"));
        assert!(output.contains("Activity log:\n  (empty)\n"));
    }
}
