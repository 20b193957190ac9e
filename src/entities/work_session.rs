//! Work session record: one completed (or still-open) login/logout cycle.

use super::{int_field, optional_timestamp_field, text_field, timestamp, timestamp_field};
use crate::errors::Result;
use crate::store::{ColumnType, CoercionTable, RawRecord, Record, Value};
use chrono::NaiveDateTime;

const SECONDS_PER_HOUR: f64 = 3600.0;

/// One row of the work session log.
///
/// Sessions are append-only and never mutated after creation. The employee
/// name is a denormalized copy of the roster entry at login time; there is no
/// enforced referential integrity with the roster file.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkSession {
    /// Id of the employee who worked the session.
    pub employee_id: i64,
    /// Denormalized username at login time.
    pub employee_name: String,
    /// When the session started.
    pub login_time: NaiveDateTime,
    /// When the session ended; `None` while still open.
    pub logout_time: Option<NaiveDateTime>,
}

impl WorkSession {
    /// Column coercions for the session log file.
    #[must_use]
    pub fn coercion_table() -> CoercionTable {
        CoercionTable::new().column("employee_id", ColumnType::Integer)
    }

    /// Session length in hours. An open session counts as exactly zero.
    #[must_use]
    pub fn hours(&self) -> f64 {
        match self.logout_time {
            Some(logout) => {
                let duration = logout.signed_duration_since(self.login_time);
                #[allow(clippy::cast_precision_loss)]
                let seconds = duration.num_milliseconds() as f64 / 1000.0;
                seconds / SECONDS_PER_HOUR
            }
            None => 0.0,
        }
    }
}

impl Record for WorkSession {
    fn from_raw(raw: &RawRecord) -> Result<Self> {
        Ok(Self {
            employee_id: int_field(raw, "employee_id")?,
            employee_name: text_field(raw, "employee_name")?,
            login_time: timestamp_field(raw, "login_time")?,
            logout_time: optional_timestamp_field(raw, "logout_time")?,
        })
    }

    fn to_raw(&self) -> RawRecord {
        RawRecord::new()
            .with("employee_id", Value::Int(self.employee_id))
            .with("employee_name", Value::Text(self.employee_name.clone()))
            .with("login_time", Value::Text(timestamp::render(self.login_time)))
            .with(
                "logout_time",
                Value::Text(timestamp::render_optional(self.logout_time)),
            )
    }
}
