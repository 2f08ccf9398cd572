//! Row-to-text helpers.
//!
//! The `cases` table has no fixed schema, so every cell is rendered to text
//! by its dynamic storage class instead of through a typed getter.

use libsql::Value;

use crate::error::StoreError;

/// Render a dynamic value as text. `None` is SQL NULL.
///
/// Integral REAL values drop the trailing `.0` so a year stored as `2021.0`
/// reads as `2021`. BLOBs are decoded as lossy UTF-8.
#[must_use]
pub fn value_to_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Integer(i) => Some(i.to_string()),
        Value::Real(f) => Some(real_to_text(f)),
        Value::Text(s) => Some(s),
        Value::Blob(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
    }
}

#[allow(clippy::float_cmp)]
fn real_to_text(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 {
        format!("{f:.0}")
    } else {
        f.to_string()
    }
}

/// Read a COUNT(*) style column as `u64`.
///
/// # Errors
///
/// Returns `StoreError::Query` if the value is negative.
pub fn get_count(row: &libsql::Row, idx: i32) -> Result<u64, StoreError> {
    let n = row.get::<i64>(idx)?;
    u64::try_from(n).map_err(|_| StoreError::Query(format!("negative count {n}")))
}

/// Quote an identifier for interpolation into SQL.
#[must_use]
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
