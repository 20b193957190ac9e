//! Shared test utilities.
//!
//! Builders for records with sensible defaults, tempdir-backed stores, and a
//! ready-made configuration for end-to-end runs.

use crate::config::{AdminCredentials, AppConfig, DataFiles};
use crate::entities::{Employee, Sale, WorkSession};
use crate::store::RecordStore;
use chrono::{NaiveDate, NaiveDateTime};
use std::path::Path;

#[allow(clippy::unwrap_used)]
fn on_test_day(hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 15)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

/// A non-admin employee whose password is `"<username>-pw"`.
pub fn employee(id: i64, username: &str) -> Employee {
    Employee {
        id,
        username: username.to_string(),
        password: format!("{username}-pw"),
        is_admin: false,
    }
}

/// A sale made at noon on the fixed test day.
pub fn sale(employee_id: i64, product_name: &str, total_price: f64) -> Sale {
    Sale {
        employee_id,
        product_name: product_name.to_string(),
        total_price,
        sale_time: on_test_day(12),
    }
}

/// A work session on the fixed test day; `logout_hour: None` leaves it open.
pub fn session(
    employee_id: i64,
    employee_name: &str,
    login_hour: u32,
    logout_hour: Option<u32>,
) -> WorkSession {
    WorkSession {
        employee_id,
        employee_name: employee_name.to_string(),
        login_time: on_test_day(login_hour),
        logout_time: logout_hour.map(on_test_day),
    }
}

/// Roster store under the given directory.
pub fn employee_store(dir: &Path) -> RecordStore<Employee> {
    RecordStore::new(dir.join("employees.csv"), Employee::coercion_table())
}

/// Session log store under the given directory.
pub fn session_store(dir: &Path) -> RecordStore<WorkSession> {
    RecordStore::new(dir.join("work_sessions.csv"), WorkSession::coercion_table())
}

/// Sales log store under the given directory.
pub fn sale_store(dir: &Path) -> RecordStore<Sale> {
    RecordStore::new(dir.join("sales.csv"), Sale::coercion_table())
}

/// Configuration rooted in the given directory, admin pair `boss`/`secret`.
pub fn test_config(dir: &Path) -> AppConfig {
    AppConfig {
        files: DataFiles {
            employees: dir.join("employees.csv"),
            work_sessions: dir.join("work_sessions.csv"),
            sales: dir.join("sales.csv"),
        },
        admin: AdminCredentials {
            username: "boss".to_string(),
            password: "secret".to_string(),
        },
    }
}
