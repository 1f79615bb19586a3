//! Console front end
//!
//! This module wires the configuration to a service and bridges the
//! interactive menu with the service layer.

pub mod menu;
pub mod prompt;

pub use menu::{Menu, MenuChoice};

use crate::audit::AuditLogger;
use crate::config::{BudgetPaths, Settings};
use crate::error::BudgetResult;
use crate::services::BudgetService;
use crate::storage::CsvFileStore;

/// Build the file-backed service described by the settings
pub fn build_service(
    paths: &BudgetPaths,
    settings: &Settings,
) -> BudgetResult<BudgetService<CsvFileStore>> {
    paths.ensure_directories()?;

    let store = CsvFileStore::new(paths.users_file(&settings.data_file))
        .skip_malformed_rows(settings.skip_malformed_rows);

    let mut service =
        BudgetService::new(store).case_insensitive_lookup(settings.case_insensitive_lookup);
    if settings.audit_enabled {
        service = service.with_audit(AuditLogger::new(paths.audit_log()));
    }

    tracing::debug!("Using data file {}", service.store().path().display());
    Ok(service)
}

/// Describe the resolved paths and settings
pub fn format_config(paths: &BudgetPaths, settings: &Settings) -> String {
    let mut output = String::new();
    output.push_str("Budget Planner Configuration\n");
    output.push_str("============================\n");
    output.push_str(&format!("Base directory:  {}\n", paths.base_dir().display()));
    output.push_str(&format!("Settings file:   {}\n", paths.settings_file().display()));
    output.push_str(&format!(
        "Data file:       {}\n",
        paths.users_file(&settings.data_file).display()
    ));
    output.push_str(&format!("Audit log:       {}\n", paths.audit_log().display()));
    output.push('\n');
    output.push_str("Settings:\n");
    output.push_str(&format!("  Skip malformed rows:     {}\n", settings.skip_malformed_rows));
    output.push_str(&format!(
        "  Case-insensitive lookup: {}\n",
        settings.case_insensitive_lookup
    ));
    output.push_str(&format!("  Audit enabled:           {}\n", settings.audit_enabled));
    output
}

/// Describe the most recent audited changes, oldest first
pub fn format_history(logger: &AuditLogger, count: usize) -> BudgetResult<String> {
    if !logger.exists() {
        return Ok("No changes recorded yet.\n".to_string());
    }

    let entries = logger.read_recent(count)?;
    let mut output = format!("Recent changes ({})\n", logger.path().display());
    for entry in &entries {
        output.push_str(&entry.format_human_readable());
        output.push('\n');
    }
    Ok(output)
}

/// Create the base directory and write the current settings to disk
pub fn init_config(paths: &BudgetPaths, settings: &Settings) -> BudgetResult<()> {
    settings.save(paths)?;
    tracing::debug!("Wrote {}", paths.settings_file().display());
    Ok(())
}
