//! Budget Planner - menu-driven personal budget tracker
//!
//! This library provides the core functionality for the budget planner: a
//! small set of user budget profiles (name, email, income, expenses, savings
//! goal) kept in a flat CSV file, with create/read/update/delete operations,
//! a session activity report and a savings-duration projection.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: The user record and its validation rules
//! - `storage`: Whole-file persistence behind the `UserStore` trait
//! - `activity`: In-memory session activity log and report
//! - `audit`: Persistent audit trail of mutations
//! - `services`: Business logic layer
//! - `display`: Terminal formatting
//! - `cli`: Interactive menu
//!
//! # Example
//!
//! ```rust,ignore
//! use budget_planner::services::BudgetService;
//! use budget_planner::storage::MemoryStore;
//!
//! let mut service = BudgetService::new(MemoryStore::new());
//! service.create("Ann", "ann@example.com", 3000.0, 2000.0, 5000.0)?;
//! let outcome = service.savings_duration("ann@example.com")?;
//! ```

pub mod activity;
pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{BudgetError, BudgetResult};
