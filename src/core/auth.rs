//! Credential checks.
//!
//! Authentication is plain equality against the stored plaintext credentials;
//! nothing here hashes or rate-limits. The administrator pair comes from
//! configuration, never from the roster.

use crate::config::AdminCredentials;
use crate::entities::Employee;
use crate::errors::{Error, Result};
use tracing::debug;

/// Finds the roster entry matching the given credentials.
///
/// # Errors
/// Returns [`Error::Authentication`] when no entry matches.
pub fn authenticate<'a>(
    roster: &'a [Employee],
    username: &str,
    password: &str,
) -> Result<&'a Employee> {
    roster
        .iter()
        .find(|employee| employee.username == username && employee.password == password)
        .inspect(|employee| debug!(username, id = employee.id, "employee authenticated"))
        .ok_or_else(|| Error::Authentication {
            username: username.to_string(),
        })
}

/// Checks the administrator credential pair from configuration.
///
/// # Errors
/// Returns [`Error::Authentication`] on mismatch.
pub fn verify_admin(admin: &AdminCredentials, username: &str, password: &str) -> Result<()> {
    if admin.username == username && admin.password == password {
        debug!(username, "admin authenticated");
        Ok(())
    } else {
        Err(Error::Authentication {
            username: username.to_string(),
        })
    }
}
