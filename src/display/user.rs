//! User display formatting
//!
//! Formats users for terminal output in table form.

use crate::models::{SavingsOutcome, User};

use super::report::format_amount;

/// Format a list of users as a table
pub fn format_user_list(users: &[User]) -> String {
    if users.is_empty() {
        return "No users found.".to_string();
    }

    let name_width = column_width(users.iter().map(|u| u.name.as_str()), "Name");
    let email_width = column_width(users.iter().map(|u| u.email.as_str()), "Email");

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:<email_width$}  {:>12}  {:>12}  {:>12}  {}\n",
        "Name",
        "Email",
        "Income",
        "Expenses",
        "Savings Goal",
        "Status",
        name_width = name_width,
        email_width = email_width,
    ));

    output.push_str(&format!(
        "{:-<name_width$}  {:-<email_width$}  {:->12}  {:->12}  {:->12}  {:-<12}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
        email_width = email_width,
    ));

    for user in users {
        let status = if user.is_overspending() {
            "Overspending"
        } else {
            ""
        };

        output.push_str(&format!(
            "{:<name_width$}  {:<email_width$}  {:>12}  {:>12}  {:>12}  {}\n",
            user.name,
            user.email,
            format_amount(user.income),
            format_amount(user.expenses),
            format_amount(user.savings_goal),
            status,
            name_width = name_width,
            email_width = email_width,
        ));
    }

    output.push_str(&format!("\nTotal: {} users\n", users.len()));
    output
}

/// Format the result of a savings projection
pub fn format_savings_outcome(outcome: &SavingsOutcome) -> String {
    match outcome {
        SavingsOutcome::Months(months) => format!(
            "It will take approximately {} month(s) to reach the savings goal.",
            months
        ),
        SavingsOutcome::CannotSave { .. } => {
            "This user cannot save money with current income and expenses.".to_string()
        }
    }
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>, header: &str) -> usize {
    values
        .map(|v| v.chars().count())
        .max()
        .unwrap_or(0)
        .max(header.len())
}
