//! Flat-file user store
//!
//! The whole record set is read in full and written in full. Saving truncates
//! the file and rewrites it in place; the last writer wins.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use csv::{ByteRecord, ReaderBuilder};

use crate::error::{BudgetError, BudgetResult};
use crate::models::User;

use super::record::{decode_record, encode_user};
use super::{LoadedUsers, UserStore};

/// User store backed by a comma-delimited file, one record per line
#[derive(Debug, Clone)]
pub struct CsvFileStore {
    path: PathBuf,
    skip_malformed_rows: bool,
}

impl CsvFileStore {
    /// Create a store for the given file (the file need not exist yet)
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            skip_malformed_rows: false,
        }
    }

    /// Skip undecodable rows instead of failing the load
    pub fn skip_malformed_rows(mut self, skip: bool) -> Self {
        self.skip_malformed_rows = skip;
        self
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl UserStore for CsvFileStore {
    fn load_all(&self) -> BudgetResult<LoadedUsers> {
        let file = File::open(&self.path).map_err(|e| {
            BudgetError::Storage(format!("Failed to open {}: {}", self.path.display(), e))
        })?;

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(BufReader::new(file));

        let mut loaded = LoadedUsers::default();
        let mut record = ByteRecord::new();

        loop {
            let has_record = reader.read_byte_record(&mut record).map_err(|e| {
                BudgetError::Storage(format!("Failed to read {}: {}", self.path.display(), e))
            })?;
            if !has_record {
                break;
            }

            let line = record
                .position()
                .map(|p| p.line() as usize)
                .unwrap_or_default();

            match decode_record(&record, line) {
                Ok(user) => loaded.users.push(user),
                Err(err) if self.skip_malformed_rows && err.is_malformed() => {
                    tracing::warn!("Skipping row in {}: {}", self.path.display(), err);
                    loaded.skipped.push(err);
                }
                Err(err) => return Err(err),
            }
        }

        tracing::debug!(
            "Loaded {} users from {}",
            loaded.users.len(),
            self.path.display()
        );
        Ok(loaded)
    }

    fn save_all(&mut self, users: &[User]) -> BudgetResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    BudgetError::Storage(format!(
                        "Failed to create directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let file = File::create(&self.path).map_err(|e| {
            BudgetError::Storage(format!("Failed to write {}: {}", self.path.display(), e))
        })?;
        let mut writer = BufWriter::new(file);

        for user in users {
            let line = encode_user(user)?;
            writeln!(writer, "{}", line).map_err(|e| {
                BudgetError::Storage(format!("Failed to write {}: {}", self.path.display(), e))
            })?;
        }

        writer.flush().map_err(|e| {
            BudgetError::Storage(format!("Failed to flush {}: {}", self.path.display(), e))
        })?;

        tracing::debug!("Saved {} users to {}", users.len(), self.path.display());
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
