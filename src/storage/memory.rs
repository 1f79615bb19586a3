//! In-memory user store
//!
//! Used by tests and anywhere a throwaway record set is wanted.

use crate::error::{BudgetError, BudgetResult};
use crate::models::User;

use super::{LoadedUsers, UserStore};

/// User store that keeps the record set in a vector
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    users: Vec<User>,
    save_count: usize,
    fail_saves: bool,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with users
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users,
            ..Self::default()
        }
    }

    /// Make every subsequent save fail with a storage error
    pub fn fail_saves(mut self, fail: bool) -> Self {
        self.fail_saves = fail;
        self
    }

    /// The users as last saved
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Number of successful saves
    pub fn save_count(&self) -> usize {
        self.save_count
    }
}

impl UserStore for MemoryStore {
    fn load_all(&self) -> BudgetResult<LoadedUsers> {
        Ok(LoadedUsers {
            users: self.users.clone(),
            skipped: Vec::new(),
        })
    }

    fn save_all(&mut self, users: &[User]) -> BudgetResult<()> {
        if self.fail_saves {
            return Err(BudgetError::Storage("memory store is read-only".into()));
        }
        self.users = users.to_vec();
        self.save_count += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
