//! Core data models for the budget planner
//!
//! This module contains the user record and the validation rules applied
//! wherever a record is constructed or changed.

pub mod user;
pub mod validation;

pub use user::{SavingsOutcome, User, UserValidationError};
pub use validation::{is_unique, is_valid_email, parse_positive_amount, AmountError};
