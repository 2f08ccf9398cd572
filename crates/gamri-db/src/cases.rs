//! Read-only access to the `cases` table.
//!
//! The store file is owned by an external ingestion process. gamri only
//! reads it: an absent file or an absent table is an empty case set, never
//! an error, and the file is never created here.

use std::path::Path;

use gamri_core::loader::{LoadOptions, RawTable, build_cases};
use gamri_core::record::CaseRecord;
use gamri_core::taxonomy::Taxonomy;
use libsql::{Builder, OpenFlags};

use crate::error::StoreError;
use crate::helpers::{quote_ident, value_to_text};

/// Handle on an existing cases database, opened read-only.
pub struct CaseStore {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl CaseStore {
    /// Open the store at `path`. Returns `Ok(None)` if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the file exists but cannot be opened.
    pub async fn open(path: &Path) -> Result<Option<Self>, StoreError> {
        if !path.is_file() {
            tracing::debug!(path = %path.display(), "cases store absent");
            return Ok(None);
        }
        let db = Builder::new_local(path)
            .flags(OpenFlags::SQLITE_OPEN_READ_ONLY)
            .build()
            .await?;
        let conn = db.connect()?;
        Ok(Some(Self { db, conn }))
    }

    /// Whether `table` exists in the store as a table or a view.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the catalog query fails.
    pub async fn has_table(&self, table: &str) -> Result<bool, StoreError> {
        let mut rows = self
            .conn
            .query(
                "SELECT name FROM sqlite_master WHERE type IN ('table', 'view') AND name = ?1",
                [table],
            )
            .await?;
        Ok(rows.next().await?.is_some())
    }

    /// Read every row of `table` with each cell rendered as text.
    ///
    /// A missing table reads as an empty [`RawTable`].
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the query or a cell read fails.
    pub async fn read_table(&self, table: &str) -> Result<RawTable, StoreError> {
        if !self.has_table(table).await? {
            tracing::debug!(table, "cases table absent");
            return Ok(RawTable::default());
        }

        let sql = format!("SELECT * FROM {}", quote_ident(table));
        let mut rows = self
            .conn
            .query(&sql, ())
            .await
            .map_err(|e| StoreError::Query(format!("{sql}: {e}")))?;

        let width = rows.column_count();
        let columns: Vec<String> = (0..width)
            .map(|i| rows.column_name(i).unwrap_or_default().to_string())
            .collect();

        let mut raw = RawTable {
            columns,
            rows: Vec::new(),
        };
        while let Some(row) = rows.next().await? {
            let mut cells = Vec::with_capacity(raw.columns.len());
            for i in 0..width {
                cells.push(value_to_text(row.get_value(i)?));
            }
            raw.rows.push(cells);
        }
        tracing::debug!(table, rows = raw.rows.len(), "read cases table");
        Ok(raw)
    }
}

/// Read the store at `path` and run the load pipeline over `table`.
///
/// # Errors
///
/// Returns `StoreError` only for faults on a store that exists.
pub async fn load_cases(
    path: &Path,
    table: &str,
    taxonomy: &Taxonomy,
    options: &LoadOptions,
) -> Result<Vec<CaseRecord>, StoreError> {
    let Some(store) = CaseStore::open(path).await? else {
        return Ok(Vec::new());
    };
    let raw = store.read_table(table).await?;
    Ok(build_cases(&raw, taxonomy, options))
}
