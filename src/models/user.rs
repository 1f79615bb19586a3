//! User model
//!
//! One person's budget profile. The email is the natural key; name and email
//! never change after creation.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::validation::{is_positive_amount, is_valid_email, is_valid_name};

/// A user's budget profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Display name
    pub name: String,

    /// Email address, unique across all users
    pub email: String,

    /// Monthly income
    pub income: f64,

    /// Monthly expenses (may exceed income)
    pub expenses: f64,

    /// Target amount to save
    pub savings_goal: f64,
}

/// Result of projecting how long a user needs to reach their savings goal
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SavingsOutcome {
    /// Whole months until the goal is reached
    Months(u64),
    /// Income does not exceed expenses
    CannotSave { monthly_savings: f64 },
}

impl User {
    /// Create a new user
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        income: f64,
        expenses: f64,
        savings_goal: f64,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            income,
            expenses,
            savings_goal,
        }
    }

    /// Income left over each month
    pub fn monthly_savings(&self) -> f64 {
        self.income - self.expenses
    }

    /// Whether expenses exceed income
    pub fn is_overspending(&self) -> bool {
        self.expenses > self.income
    }

    /// Months needed to reach the savings goal at the current monthly savings
    pub fn savings_outcome(&self) -> SavingsOutcome {
        let monthly_savings = self.monthly_savings();
        if monthly_savings <= 0.0 {
            return SavingsOutcome::CannotSave { monthly_savings };
        }

        let months = (self.savings_goal / monthly_savings).ceil();
        SavingsOutcome::Months(months as u64)
    }

    /// Replace the three amounts
    pub fn set_amounts(&mut self, income: f64, expenses: f64, savings_goal: f64) {
        self.income = income;
        self.expenses = expenses;
        self.savings_goal = savings_goal;
    }

    /// Normalize an email for case-insensitive comparison
    pub fn normalize_email(email: &str) -> String {
        email.trim().to_lowercase()
    }

    /// Check if this user has the given email
    pub fn matches_email(&self, email: &str, case_insensitive: bool) -> bool {
        if case_insensitive {
            Self::normalize_email(&self.email) == Self::normalize_email(email)
        } else {
            self.email == email
        }
    }

    /// Validate the user
    pub fn validate(&self) -> Result<(), UserValidationError> {
        if !is_valid_name(&self.name) {
            return Err(UserValidationError::EmptyName);
        }

        if !is_valid_email(&self.email) {
            return Err(UserValidationError::InvalidEmail(self.email.clone()));
        }

        for (field, value) in [
            ("income", self.income),
            ("expenses", self.expenses),
            ("savings goal", self.savings_goal),
        ] {
            if !is_positive_amount(value) {
                return Err(UserValidationError::NonPositiveAmount { field, value });
            }
        }

        Ok(())
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}

/// Validation errors for users
#[derive(Debug, Clone, PartialEq)]
pub enum UserValidationError {
    EmptyName,
    InvalidEmail(String),
    NonPositiveAmount { field: &'static str, value: f64 },
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::InvalidEmail(email) => write!(f, "Invalid email format: {}", email),
            Self::NonPositiveAmount { field, value } => {
                write!(f, "{} must be a positive number (got {})", field, value)
            }
        }
    }
}

impl std::error::Error for UserValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> User {
        User::new("Ann", "ann@example.com", 3000.0, 2000.0, 5000.0)
    }

    #[test]
    fn test_savings_outcome_months() {
        assert_eq!(sample().savings_outcome(), SavingsOutcome::Months(5));
    }

    #[test]
    fn test_savings_outcome_rounds_up() {
        let user = User::new("Ann", "ann@example.com", 3000.0, 2000.0, 5001.0);
        assert_eq!(user.savings_outcome(), SavingsOutcome::Months(6));
    }

    #[test]
    fn test_cannot_save_when_expenses_exceed_income() {
        let user = User::new("Bob", "bob@example.com", 1000.0, 1200.0, 500.0);
        assert!(user.is_overspending());
        assert_eq!(
            user.savings_outcome(),
            SavingsOutcome::CannotSave {
                monthly_savings: -200.0
            }
        );
    }

    #[test]
    fn test_cannot_save_when_break_even() {
        let user = User::new("Cy", "cy@example.com", 1000.0, 1000.0, 500.0);
        assert!(!user.is_overspending());
        assert!(matches!(
            user.savings_outcome(),
            SavingsOutcome::CannotSave { .. }
        ));
    }

    #[test]
    fn test_matches_email() {
        let user = sample();
        assert!(user.matches_email("ann@example.com", false));
        assert!(!user.matches_email("ANN@example.com", false));
        assert!(user.matches_email("ANN@example.com", true));
    }

    #[test]
    fn test_validate() {
        assert!(sample().validate().is_ok());

        let mut user = sample();
        user.name = "   ".into();
        assert_eq!(user.validate(), Err(UserValidationError::EmptyName));

        let mut user = sample();
        user.email = "not-an-email".into();
        assert!(matches!(
            user.validate(),
            Err(UserValidationError::InvalidEmail(_))
        ));

        let mut user = sample();
        user.savings_goal = 0.0;
        assert!(matches!(
            user.validate(),
            Err(UserValidationError::NonPositiveAmount {
                field: "savings goal",
                ..
            })
        ));
    }

    #[test]
    fn test_overspending_is_valid() {
        let user = User::new("Bob", "bob@example.com", 1000.0, 1200.0, 500.0);
        assert!(user.validate().is_ok());
    }
}
