//! Backing store configuration.

use std::path::{Path, PathBuf};

use gamri_core::year::YearOrder;
use serde::{Deserialize, Serialize};

fn default_cases_path() -> String {
    "audit_database.db".into()
}

fn default_table() -> String {
    "cases".into()
}

fn default_activity_path() -> String {
    ".gamri/activity.db".into()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// libSQL/SQLite file holding the read-only `cases` table.
    #[serde(default = "default_cases_path")]
    pub cases_path: String,

    /// Table to read cases from.
    #[serde(default = "default_table")]
    pub table: String,

    /// libSQL file for the append-only visit/action/AI logs.
    #[serde(default = "default_activity_path")]
    pub activity_path: String,

    /// Order of loaded cases by decision year.
    #[serde(default)]
    pub year_order: YearOrder,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            cases_path: default_cases_path(),
            table: default_table(),
            activity_path: default_activity_path(),
            year_order: YearOrder::default(),
        }
    }
}

impl StoreConfig {
    /// Cases file, resolved against `root` when relative.
    #[must_use]
    pub fn cases_path_in(&self, root: &Path) -> PathBuf {
        resolve(root, &self.cases_path)
    }

    /// Activity log file, resolved against `root` when relative.
    #[must_use]
    pub fn activity_path_in(&self, root: &Path) -> PathBuf {
        resolve(root, &self.activity_path)
    }

    /// Whether the table name is a plain SQL identifier.
    ///
    /// The name is interpolated into `SELECT * FROM "<table>"`, so only
    /// identifier characters are accepted.
    #[must_use]
    pub fn table_is_valid(&self) -> bool {
        !self.table.is_empty()
            && self
                .table
                .chars()
                .all(|c| c.is_alphanumeric() || c == '_')
    }
}

fn resolve(root: &Path, path: &str) -> PathBuf {
    let path = Path::new(path);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
