//! Domain record definitions.
//!
//! One module per record shape, each implementing [`Record`] so a
//! [`RecordStore`](crate::store::RecordStore) can move it to and from its
//! backing file. Shared helpers at the bottom pull typed fields out of a raw
//! row and report the offending column on mismatch.

/// Employee roster record.
pub mod employee;
/// Sale record.
pub mod sale;
/// Flexible timestamp parsing and canonical rendering.
pub mod timestamp;
/// Work session record.
pub mod work_session;

pub use employee::Employee;
pub use sale::Sale;
pub use work_session::WorkSession;

use crate::errors::{Error, Result};
use crate::store::{RawRecord, Value};
use chrono::NaiveDateTime;

fn mismatch(column: &str, value: &Value, expected: &'static str) -> Error {
    Error::TypeCoercion {
        column: column.to_string(),
        value: value.render(),
        expected,
    }
}

pub(crate) fn int_field(raw: &RawRecord, column: &str) -> Result<i64> {
    let value = raw.require(column)?;
    value.as_int().ok_or_else(|| mismatch(column, value, "integer"))
}

pub(crate) fn float_field(raw: &RawRecord, column: &str) -> Result<f64> {
    let value = raw.require(column)?;
    value.as_float().ok_or_else(|| mismatch(column, value, "float"))
}

pub(crate) fn bool_field(raw: &RawRecord, column: &str) -> Result<bool> {
    let value = raw.require(column)?;
    value.as_bool().ok_or_else(|| mismatch(column, value, "boolean"))
}

pub(crate) fn text_field(raw: &RawRecord, column: &str) -> Result<String> {
    let value = raw.require(column)?;
    value
        .as_text()
        .map(ToString::to_string)
        .ok_or_else(|| mismatch(column, value, "string"))
}

pub(crate) fn timestamp_field(raw: &RawRecord, column: &str) -> Result<NaiveDateTime> {
    let text = text_field(raw, column)?;
    timestamp::parse(column, &text)
}

/// Absent column or empty cell both mean "no timestamp".
pub(crate) fn optional_timestamp_field(
    raw: &RawRecord,
    column: &str,
) -> Result<Option<NaiveDateTime>> {
    match raw.get(column) {
        None => Ok(None),
        Some(value) => {
            let text = value
                .as_text()
                .ok_or_else(|| mismatch(column, value, "string"))?;
            timestamp::parse_optional(column, text)
        }
    }
}
