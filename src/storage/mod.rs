//! Storage layer for the budget planner
//!
//! The record set is always loaded in full and saved in full. Stores sit
//! behind the [`UserStore`] trait so the service does not depend on the file
//! format.

pub mod csv_store;
pub mod memory;
pub mod record;

pub use csv_store::CsvFileStore;
pub use memory::MemoryStore;
pub use record::{decode_user, encode_user};

use crate::error::{BudgetError, BudgetResult};
use crate::models::User;

/// Result of loading the full record set
#[derive(Debug, Default)]
pub struct LoadedUsers {
    /// Decoded users in stored order
    pub users: Vec<User>,
    /// Rows that were skipped because they could not be decoded
    pub skipped: Vec<BudgetError>,
}

/// Whole-set persistence for user records
pub trait UserStore {
    /// Read every stored user
    fn load_all(&self) -> BudgetResult<LoadedUsers>;

    /// Replace the stored set with `users`, in order
    fn save_all(&mut self, users: &[User]) -> BudgetResult<()>;

    /// Human-readable description of where records live
    fn location(&self) -> String;
}
