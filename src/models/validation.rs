//! Input validation rules shared by the service and the console prompts

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use super::user::User;

const EMAIL_PATTERN: &str = r"^[A-Za-z0-9_.-]+@[A-Za-z0-9_.-]+\.[a-zA-Z]{2,6}$";

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"))
}

/// Check an email against the `local@domain.tld` pattern
///
/// The top-level domain must be 2 to 6 ASCII letters.
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Check that no existing user already has this email (case-insensitive)
pub fn is_unique(email: &str, existing: &[User]) -> bool {
    let normalized = User::normalize_email(email);
    !existing
        .iter()
        .any(|user| User::normalize_email(&user.email) == normalized)
}

/// Check that a name has content once surrounding whitespace is removed
pub fn is_valid_name(name: &str) -> bool {
    !name.trim().is_empty()
}

/// Check that an amount is finite and strictly positive
pub fn is_positive_amount(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Parse user input as a strictly positive amount
pub fn parse_positive_amount(input: &str) -> Result<f64, AmountError> {
    let trimmed = input.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| AmountError::NotANumber(trimmed.to_string()))?;

    if !value.is_finite() {
        return Err(AmountError::NotANumber(trimmed.to_string()));
    }
    if value <= 0.0 {
        return Err(AmountError::NotPositive(value));
    }

    Ok(value)
}

/// Reasons an amount is rejected
#[derive(Debug, Clone, PartialEq)]
pub enum AmountError {
    NotANumber(String),
    NotPositive(f64),
}

impl fmt::Display for AmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotANumber(input) => write!(f, "'{}' is not a valid number", input),
            Self::NotPositive(value) => {
                write!(f, "amount must be greater than zero (got {})", value)
            }
        }
    }
}

impl std::error::Error for AmountError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@mail.example.com"));
        assert!(is_valid_email("under_score-dash@host-name.museum"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email("bad"));
        assert!(!is_valid_email("a@b.c"));
        assert!(!is_valid_email("a@b.abcdefg"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@b.c0m"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_unique_is_case_insensitive() {
        let existing = vec![User::new("Ann", "Ann@Example.com", 1.0, 1.0, 1.0)];

        assert!(!is_unique("ann@example.com", &existing));
        assert!(!is_unique("ANN@EXAMPLE.COM", &existing));
        assert!(is_unique("bob@example.com", &existing));
        assert!(is_unique("anyone@example.com", &[]));
    }

    #[test]
    fn test_name_validation() {
        assert!(is_valid_name("Ann"));
        assert!(is_valid_name("  Ann  "));
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("   \t"));
    }

    #[test]
    fn test_parse_positive_amount() {
        assert_eq!(parse_positive_amount("3000").unwrap(), 3000.0);
        assert_eq!(parse_positive_amount(" 12.5 ").unwrap(), 12.5);

        assert!(matches!(
            parse_positive_amount("abc"),
            Err(AmountError::NotANumber(_))
        ));
        assert!(matches!(
            parse_positive_amount("0"),
            Err(AmountError::NotPositive(_))
        ));
        assert!(matches!(
            parse_positive_amount("-5"),
            Err(AmountError::NotPositive(_))
        ));
        assert!(matches!(
            parse_positive_amount("inf"),
            Err(AmountError::NotANumber(_))
        ));
        assert!(matches!(
            parse_positive_amount("NaN"),
            Err(AmountError::NotANumber(_))
        ));
    }

    #[test]
    fn test_is_positive_amount() {
        assert!(is_positive_amount(0.01));
        assert!(!is_positive_amount(0.0));
        assert!(!is_positive_amount(-1.0));
        assert!(!is_positive_amount(f64::NAN));
        assert!(!is_positive_amount(f64::INFINITY));
    }
}
