//! Append-only activity logs.
//!
//! Visits, command actions, and AI prompt/response pairs are recorded into a
//! libSQL file separate from the cases store. Recording is best-effort: a
//! failed write is counted and logged at `warn`, and the caller carries on.

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use gamri_core::responses::{ActivitySummary, LabelCount};
use libsql::Builder;

use crate::error::StoreError;
use crate::helpers::get_count;

/// One prompt/response exchange with the hosted model.
#[derive(Debug, Clone, Copy)]
pub struct AiExchange<'a> {
    /// `guide` or `question`.
    pub kind: &'a str,
    /// Category label or question text.
    pub subject: Option<&'a str>,
    pub prompt: &'a str,
    /// `None` when generation failed.
    pub response: Option<&'a str>,
}

/// Write counters for the current process.
#[derive(Debug, Default)]
pub struct LogDiagnostics {
    attempted: AtomicU64,
    failed: AtomicU64,
}

impl LogDiagnostics {
    #[must_use]
    pub fn attempted(&self) -> u64 {
        self.attempted.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn failed(&self) -> u64 {
        self.failed.load(Ordering::Relaxed)
    }
}

/// Handle on the activity log database.
pub struct ActivityLog {
    #[allow(dead_code)]
    db: Option<libsql::Database>,
    conn: Option<libsql::Connection>,
    diagnostics: LogDiagnostics,
}

impl ActivityLog {
    /// Open (or create) the log database at `path` and run migrations.
    ///
    /// Parent directories are created. `":memory:"` opens an in-memory log.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the file cannot be created or migrated.
    pub async fn open_local(path: &str) -> Result<Self, StoreError> {
        let parent = Path::new(path)
            .parent()
            .filter(|p| path != ":memory:" && !p.as_os_str().is_empty());
        if let Some(parent) = parent {
            std::fs::create_dir_all(parent)?;
        }
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;
        Self::run_migrations(&conn).await?;
        Ok(Self {
            db: Some(db),
            conn: Some(conn),
            diagnostics: LogDiagnostics::default(),
        })
    }

    /// A log that records nothing. Used when the log file cannot be opened.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            db: None,
            conn: None,
            diagnostics: LogDiagnostics::default(),
        }
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.conn.is_some()
    }

    #[must_use]
    pub const fn diagnostics(&self) -> &LogDiagnostics {
        &self.diagnostics
    }

    /// Record one visit.
    pub async fn record_visit(&self) {
        let now = Utc::now().to_rfc3339();
        self.append(
            "visit_log",
            "INSERT INTO visit_log (created_at) VALUES (?1)",
            libsql::params![now],
        )
        .await;
    }

    /// Record one command action with optional detail.
    pub async fn record_action(&self, action: &str, detail: Option<&str>) {
        let now = Utc::now().to_rfc3339();
        self.append(
            "action_log",
            "INSERT INTO action_log (created_at, action, detail) VALUES (?1, ?2, ?3)",
            libsql::params![now, action, detail],
        )
        .await;
    }

    /// Record one AI exchange.
    pub async fn record_ai(&self, exchange: &AiExchange<'_>) {
        let now = Utc::now().to_rfc3339();
        self.append(
            "ai_log",
            "INSERT INTO ai_log (created_at, kind, subject, prompt, response)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            libsql::params![
                now,
                exchange.kind,
                exchange.subject,
                exchange.prompt,
                exchange.response
            ],
        )
        .await;
    }

    async fn append(&self, table: &str, sql: &str, params: impl libsql::params::IntoParams) {
        let Some(conn) = &self.conn else {
            return;
        };
        self.diagnostics.attempted.fetch_add(1, Ordering::Relaxed);
        if let Err(error) = conn.execute(sql, params).await {
            self.diagnostics.failed.fetch_add(1, Ordering::Relaxed);
            tracing::warn!(table, %error, "activity log write failed");
        }
    }

    /// Total recorded visits.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the query fails.
    pub async fn visit_count(&self) -> Result<u64, StoreError> {
        self.count("SELECT COUNT(*) FROM visit_log").await
    }

    /// Total recorded AI exchanges.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the query fails.
    pub async fn ai_count(&self) -> Result<u64, StoreError> {
        self.count("SELECT COUNT(*) FROM ai_log").await
    }

    /// Action counts, most frequent first, ties by action name.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the query fails.
    pub async fn action_counts(&self) -> Result<Vec<LabelCount>, StoreError> {
        let Some(conn) = &self.conn else {
            return Ok(Vec::new());
        };
        let mut rows = conn
            .query(
                "SELECT action, COUNT(*) AS n FROM action_log
                 GROUP BY action ORDER BY n DESC, action ASC",
                (),
            )
            .await?;
        let mut counts = Vec::new();
        while let Some(row) = rows.next().await? {
            let count = usize::try_from(get_count(&row, 1)?)
                .map_err(|e| StoreError::Query(e.to_string()))?;
            counts.push(LabelCount {
                label: row.get::<String>(0)?,
                count,
            });
        }
        Ok(counts)
    }

    /// Everything `gamri activity` reports.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if any count query fails.
    pub async fn summary(&self) -> Result<ActivitySummary, StoreError> {
        Ok(ActivitySummary {
            visits: self.visit_count().await?,
            actions: self.action_counts().await?,
            ai_exchanges: self.ai_count().await?,
            attempted_writes: self.diagnostics.attempted(),
            failed_writes: self.diagnostics.failed(),
        })
    }

    async fn count(&self, sql: &str) -> Result<u64, StoreError> {
        let Some(conn) = &self.conn else {
            return Ok(0);
        };
        let mut rows = conn.query(sql, ()).await?;
        let row = rows.next().await?.ok_or(StoreError::NoResult)?;
        get_count(&row, 0)
    }

    #[cfg(test)]
    pub(crate) fn conn(&self) -> Option<&libsql::Connection> {
        self.conn.as_ref()
    }
}
