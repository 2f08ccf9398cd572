//! # gamri-core
//!
//! Core types and pure logic for gamri, the audit-violation case analytics
//! toolbox.
//!
//! This crate provides the foundational pieces shared across all gamri crates:
//! - The case record and its field identifiers
//! - Physical column mapping for the `cases` table
//! - Declarative keyword taxonomies and the first-match classifier
//! - The load pipeline (column cleanup, year normalization, ordering, labeling)
//! - Dashboard aggregates and keyword search
//! - Cross-cutting error types
//!
//! Nothing here performs I/O. `gamri-db` reads the table and hands a
//! [`loader::RawTable`] to [`loader::build_cases`].

pub mod classify;
pub mod columns;
pub mod errors;
pub mod loader;
pub mod record;
pub mod responses;
pub mod search;
pub mod stats;
pub mod taxonomy;
pub mod year;
