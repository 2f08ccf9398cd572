//! Activity log migration runner.
//!
//! Embeds the SQL migration files at compile time and executes them on
//! open. All statements use `IF NOT EXISTS` for idempotent re-running.
//! The `cases` store is never migrated.

use crate::activity::ActivityLog;
use crate::error::StoreError;

/// Three log tables, two indexes, six append-only triggers.
const MIGRATION_001: &str = include_str!("../migrations/001_activity.sql");

impl ActivityLog {
    /// Run all embedded migrations in sequence.
    pub(crate) async fn run_migrations(conn: &libsql::Connection) -> Result<(), StoreError> {
        conn.execute_batch(MIGRATION_001)
            .await
            .map_err(|e| StoreError::Migration(format!("001_activity: {e}")))?;
        Ok(())
    }
}
