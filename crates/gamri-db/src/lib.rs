//! # gamri-db
//!
//! libSQL storage for gamri.
//!
//! Two files are involved:
//! - the cases store, read-only, produced by an external ingestion process
//!   ([`cases`]); a missing file or table loads as an empty case set
//! - the activity log, append-only, owned by gamri ([`activity`])
//!
//! Uses the `libsql` crate (C `SQLite` fork) in local mode.

pub mod activity;
pub mod cases;
pub mod error;
pub mod helpers;
mod migrations;

pub use activity::{ActivityLog, AiExchange, LogDiagnostics};
pub use cases::{CaseStore, load_cases};
pub use error::StoreError;
