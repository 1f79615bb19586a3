//! User service
//!
//! Business logic for the user record set: CRUD, the activity report and the
//! savings projection. Every operation loads the full set from the store,
//! acts on it in memory and, for mutations, saves the full set back. The
//! activity log is only appended when an operation succeeds.

use crate::activity::{ActivityLog, ActivityReport};
use crate::audit::{AuditEntry, AuditLogger};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{is_unique, SavingsOutcome, User};
use crate::storage::UserStore;

/// Service owning the store, the session activity log and the audit trail
pub struct BudgetService<S: UserStore> {
    store: S,
    activity: ActivityLog,
    audit: Option<AuditLogger>,
    case_insensitive_lookup: bool,
    notices: Vec<String>,
}

impl<S: UserStore> BudgetService<S> {
    /// Create a new service over a store
    pub fn new(store: S) -> Self {
        Self {
            store,
            activity: ActivityLog::new(),
            audit: None,
            case_insensitive_lookup: false,
            notices: Vec::new(),
        }
    }

    /// Record create/update/delete operations in an audit log
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// Match emails case-insensitively in update, delete and savings lookups
    ///
    /// Off by default: those lookups compare emails exactly, while the
    /// uniqueness check on create always ignores case.
    pub fn case_insensitive_lookup(mut self, enabled: bool) -> Self {
        self.case_insensitive_lookup = enabled;
        self
    }

    /// The session activity log
    pub fn activity(&self) -> &ActivityLog {
        &self.activity
    }

    /// The underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Take the storage notices gathered since the last call
    pub fn drain_notices(&mut self) -> Vec<String> {
        std::mem::take(&mut self.notices)
    }

    /// Create a new user
    pub fn create(
        &mut self,
        name: &str,
        email: &str,
        income: f64,
        expenses: f64,
        savings_goal: f64,
    ) -> BudgetResult<User> {
        let user = User::new(name.trim(), email, income, expenses, savings_goal);
        user.validate()
            .map_err(|e| BudgetError::Validation(e.to_string()))?;

        let mut users = self.load_users()?;
        if !is_unique(&user.email, &users) {
            return Err(BudgetError::duplicate_user(&user.email));
        }

        users.push(user.clone());
        self.store.save_all(&users)?;

        self.audit(AuditEntry::create(&user));
        self.activity.record(format!("User created: {}", user.email));

        if user.is_overspending() {
            tracing::info!("User {} has expenses above income", user.email);
        }

        Ok(user)
    }

    /// List all users in stored order
    pub fn list(&mut self) -> BudgetResult<Vec<User>> {
        let users = self.load_users()?;
        self.activity.record("Viewed users");
        Ok(users)
    }

    /// Find a user by email without recording any activity
    pub fn find(&mut self, email: &str) -> BudgetResult<Option<User>> {
        let users = self.load_users()?;
        let case_insensitive = self.case_insensitive_lookup;
        Ok(users
            .into_iter()
            .find(|u| u.matches_email(email, case_insensitive)))
    }

    /// Replace a user's income, expenses and savings goal
    pub fn update(
        &mut self,
        email: &str,
        income: f64,
        expenses: f64,
        savings_goal: f64,
    ) -> BudgetResult<User> {
        let mut users = self.load_users()?;
        let index = self
            .position_of(&users, email)
            .ok_or_else(|| BudgetError::user_not_found(email))?;

        let before = users[index].clone();
        let mut updated = before.clone();
        updated.set_amounts(income, expenses, savings_goal);
        updated
            .validate()
            .map_err(|e| BudgetError::Validation(e.to_string()))?;

        users[index] = updated.clone();
        self.store.save_all(&users)?;

        self.audit(AuditEntry::update(&before, &updated));
        self.activity.record(format!("Updated user: {}", email));

        Ok(updated)
    }

    /// Delete a user
    pub fn delete(&mut self, email: &str) -> BudgetResult<User> {
        let mut users = self.load_users()?;
        let index = self
            .position_of(&users, email)
            .ok_or_else(|| BudgetError::user_not_found(email))?;

        let removed = users.remove(index);
        self.store.save_all(&users)?;

        self.audit(AuditEntry::delete(&removed));
        self.activity.record(format!("Deleted user: {}", email));

        Ok(removed)
    }

    /// Summarize the stored users and this session's activity
    ///
    /// The report's own log entry is appended after the summary is computed,
    /// so it only shows up in the next report.
    pub fn report(&mut self) -> BudgetResult<ActivityReport> {
        let users = self.load_users()?;
        let report = ActivityReport::build(users.len(), self.activity.entries());
        self.activity.record("Generated report");
        Ok(report)
    }

    /// Project how many months a user needs to reach their savings goal
    ///
    /// Only a successful projection is recorded in the activity log.
    pub fn savings_duration(&mut self, email: &str) -> BudgetResult<SavingsOutcome> {
        let users = self.load_users()?;
        let index = self
            .position_of(&users, email)
            .ok_or_else(|| BudgetError::user_not_found(email))?;

        let outcome = users[index].savings_outcome();
        if let SavingsOutcome::Months(_) = outcome {
            self.activity
                .record(format!("Calculated savings duration for: {}", email));
        }

        Ok(outcome)
    }

    /// Record that the session is ending
    pub fn exit(&mut self) {
        self.activity.record("Exited application");
    }

    fn position_of(&self, users: &[User], email: &str) -> Option<usize> {
        users
            .iter()
            .position(|u| u.matches_email(email, self.case_insensitive_lookup))
    }

    /// Load the full set, degrading unreadable storage to an empty set
    ///
    /// Malformed rows still fail the load unless the store skips them.
    fn load_users(&mut self) -> BudgetResult<Vec<User>> {
        match self.store.load_all() {
            Ok(loaded) => {
                for skipped in loaded.skipped {
                    self.notices.push(format!("Skipped row: {}", skipped));
                }
                Ok(loaded.users)
            }
            Err(err) if err.is_malformed() => Err(err),
            Err(err) => {
                tracing::debug!("Treating {} as empty: {}", self.store.location(), err);
                self.notices.push(format!("Error reading file: {}", err));
                Ok(Vec::new())
            }
        }
    }

    fn audit(&self, entry: AuditEntry) {
        if let Some(logger) = &self.audit {
            if let Err(e) = logger.log(&entry) {
                tracing::warn!("Failed to write audit entry for {}: {}", entry.email, e);
            }
        }
    }
}
