//! Read-append-save mutations over the record stores.
//!
//! Every mutation loads the whole collection, appends in memory, and rewrites
//! the file; there is no partial update. These helpers are the only writers
//! the Session Controller uses.

use crate::entities::{Employee, Sale, WorkSession};
use crate::errors::Result;
use crate::store::RecordStore;
use tracing::info;

/// Registers a new employee with the next sequential id (count + 1).
///
/// # Errors
/// Propagates store read/save failures.
pub fn register_employee(
    store: &RecordStore<Employee>,
    username: &str,
    password: &str,
) -> Result<Employee> {
    let mut roster = store.read_or_default()?;
    let employee = Employee {
        id: Employee::next_id(&roster),
        username: username.to_string(),
        password: password.to_string(),
        is_admin: false,
    };
    roster.push(employee.clone());
    store.save(&roster)?;
    info!(id = employee.id, username, "registered employee");
    Ok(employee)
}

/// Appends one sale to the sales log.
///
/// # Errors
/// Propagates store read/save failures.
pub fn append_sale(store: &RecordStore<Sale>, sale: Sale) -> Result<()> {
    let mut sales = store.read_or_default()?;
    sales.push(sale);
    store.save(&sales)?;
    info!(total = sales.len(), "recorded sale");
    Ok(())
}

/// Appends one completed work session to the session log.
///
/// # Errors
/// Propagates store read/save failures.
pub fn append_work_session(store: &RecordStore<WorkSession>, session: WorkSession) -> Result<()> {
    let mut sessions = store.read_or_default()?;
    sessions.push(session);
    store.save(&sessions)?;
    info!(total = sessions.len(), "recorded work session");
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::{employee_store, sale, sale_store, session, session_store};

    #[test]
    fn registration_assigns_sequential_ids_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let store = employee_store(dir.path());

        let alice = register_employee(&store, "alice", "pw-a").unwrap();
        let bob = register_employee(&store, "bob", "pw-b").unwrap();
        assert_eq!(alice.id, 1);
        assert_eq!(bob.id, 2);
        assert!(!alice.is_admin);

        let roster = store.read().unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[1].username, "bob");
    }

    #[test]
    fn first_sale_creates_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = sale_store(dir.path());

        append_sale(&store, sale(1, "Widget", 9.99)).unwrap();
        let sales = store.read().unwrap();
        assert_eq!(sales.len(), 1);
        assert_eq!(sales[0].product_name, "Widget");
        assert_eq!(sales[0].total_price, 9.99);
    }

    #[test]
    fn appends_keep_earlier_records() {
        let dir = tempfile::tempdir().unwrap();
        let store = session_store(dir.path());

        append_work_session(&store, session(1, "alice", 9, Some(17))).unwrap();
        append_work_session(&store, session(2, "bob", 10, None)).unwrap();

        let sessions = store.read().unwrap();
        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions[0].employee_name, "alice");
        assert_eq!(sessions[1].logout_time, None);
    }
}
