//! Service layer for the budget planner
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, activity tracking and derived calculations.

pub mod user;

pub use user::BudgetService;
