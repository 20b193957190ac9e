//! Employee roster record.
//!
//! Each employee has a sequential 1-based id assigned at registration
//! (current roster size + 1; ids are never reused because deletion is
//! unsupported). Uniqueness is not re-validated on load: a hand-edited file
//! with duplicate ids will merge those employees' aggregates.

use super::{bool_field, int_field, text_field};
use crate::errors::Result;
use crate::store::{ColumnType, CoercionTable, RawRecord, Record, Value};

/// One row of the employee roster file.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    /// Unique sequential id, 1-based.
    pub id: i64,
    /// Login name.
    pub username: String,
    /// Plaintext password, compared by equality only.
    pub password: String,
    /// Whether the row is flagged as an administrator.
    pub is_admin: bool,
}

impl Employee {
    /// Column coercions for the roster file.
    #[must_use]
    pub fn coercion_table() -> CoercionTable {
        CoercionTable::new()
            .column("id", ColumnType::Integer)
            .column("is_admin", ColumnType::Boolean)
    }

    /// Id for the next registration: current count + 1.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn next_id(roster: &[Self]) -> i64 {
        roster.len() as i64 + 1
    }
}

impl Record for Employee {
    fn from_raw(raw: &RawRecord) -> Result<Self> {
        Ok(Self {
            id: int_field(raw, "id")?,
            username: text_field(raw, "username")?,
            password: text_field(raw, "password")?,
            is_admin: bool_field(raw, "is_admin")?,
        })
    }

    fn to_raw(&self) -> RawRecord {
        RawRecord::new()
            .with("id", Value::Int(self.id))
            .with("username", Value::Text(self.username.clone()))
            .with("password", Value::Text(self.password.clone()))
            .with("is_admin", Value::Bool(self.is_admin))
    }
}
