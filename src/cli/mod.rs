//! The Session Controller: interactive menus composing the stores, the
//! aggregator, and authentication.
//!
//! All state lives in the record stores; this layer only prompts, dispatches,
//! and prints. Invalid menu choices print a message and redisplay the same
//! menu, at every level.

/// Admin login and query menu.
pub mod admin;
/// Console prompt/print abstraction.
pub mod console;
/// Registration and the employee flow.
pub mod employee;

pub use console::Console;

use crate::config::AppConfig;
use crate::errors::{Error, Result};
use crate::store::Stores;
use std::io::{BufRead, Write};
use tracing::warn;

/// Runs the top-level menu until the user exits.
///
/// # Errors
/// Propagates I/O failures; domain errors from a flow are printed and the
/// menu is shown again.
pub fn run<R: BufRead, W: Write>(
    config: &AppConfig,
    stores: &Stores,
    console: &mut Console<R, W>,
) -> Result<()> {
    loop {
        console.say("Welcome! Please choose an option:")?;
        console.say("1. Register a new employee")?;
        console.say("2. Log in as an employee")?;
        console.say("3. Log in as an admin")?;
        console.say("4. Exit")?;

        let choice = console.prompt("Enter your choice (1, 2, 3, or 4): ")?;
        let outcome = match choice.as_str() {
            "1" => employee::register_flow(stores, console),
            "2" => employee::login_flow(stores, console),
            "3" => admin::admin_flow(config, stores, console),
            "4" => break,
            _ => console.say("Invalid choice."),
        };
        surface(console, outcome)?;
    }
    Ok(())
}

/// Prints a domain error and carries on; lets I/O errors propagate.
pub(crate) fn surface<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    outcome: Result<()>,
) -> Result<()> {
    match outcome {
        Ok(()) => Ok(()),
        Err(Error::Io(e)) => Err(Error::Io(e)),
        Err(e) => {
            warn!(error = %e, "flow failed");
            console.say(&format!("Error: {e}"))
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::{employee, sale, test_config};
    use std::io::Cursor;
    use std::path::Path;

    /// Runs the top-level menu against scripted input, returning everything
    /// printed.
    fn run_script(dir: &Path, script: &str) -> (Stores, String) {
        let config = test_config(dir);
        let stores = Stores::from_config(&config);
        let mut console = Console::new(Cursor::new(script.to_string()), Vec::new());
        run(&config, &stores, &mut console).unwrap();
        let (_, output) = console.into_parts();
        (stores, String::from_utf8(output).unwrap())
    }

    #[test]
    fn register_sell_and_query_best_salesperson() {
        let dir = tempfile::tempdir().unwrap();
        let script = "1\nalice\npw\n\
                      2\nalice\npw\nWidget\n9.99\nlogout\n\
                      3\nboss\nsecret\n1\n5\n\
                      4\n";
        let (stores, output) = run_script(dir.path(), script);

        let sales = stores.sales.read().unwrap();
        assert_eq!(sales.len(), 1);
        assert_eq!(sales[0].employee_id, 1);
        assert_eq!(sales[0].product_name, "Widget");
        assert_eq!(sales[0].total_price, 9.99);

        let sessions = stores.work_sessions.read().unwrap();
        assert_eq!(sessions.len(), 1);
        assert!(sessions[0].logout_time.is_some());

        assert!(output.contains("Employee alice registered successfully."));
        assert!(output.contains("Sale recorded: Widget for 9.99"));
        assert!(output.contains("Best Sales Employee: alice"));
        assert!(output.contains("Total Sales Amount: 9.99"));
        assert!(output.contains(" - Product: Widget, Price: 9.99,"));
    }

    #[test]
    fn best_and_worst_across_two_employees() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        let stores = Stores::from_config(&config);
        stores
            .employees
            .save(&[employee(1, "alice"), employee(2, "bob")])
            .unwrap();
        stores
            .sales
            .save(&[sale(1, "Widget", 100.0), sale(2, "Gadget", 50.0)])
            .unwrap();

        let script = "3\nboss\nsecret\n1\n2\n5\n4\n";
        let mut console = Console::new(Cursor::new(script.to_string()), Vec::new());
        run(&config, &stores, &mut console).unwrap();
        let (_, output) = console.into_parts();
        let output = String::from_utf8(output).unwrap();

        assert!(output.contains("Best Sales Employee: alice"));
        assert!(output.contains("Total Sales Amount: 100.00"));
        assert!(output.contains("Worst Sales Employee: bob"));
        assert!(output.contains("Total Sales Amount: 50.00"));
    }

    #[test]
    fn bad_employee_credentials_return_to_the_top_menu() {
        let dir = tempfile::tempdir().unwrap();
        let script = "2\nmallory\nguess\n4\n";
        let (stores, output) = run_script(dir.path(), script);

        assert!(output.contains("Invalid credentials."));
        // No session was recorded.
        assert!(stores.work_sessions.read_or_default().unwrap().is_empty());
    }

    #[test]
    fn bad_admin_credentials_return_to_the_top_menu() {
        let dir = tempfile::tempdir().unwrap();
        let script = "3\nboss\nwrong\n4\n";
        let (_, output) = run_script(dir.path(), script);
        assert!(output.contains("Invalid credentials or not an admin."));
    }

    #[test]
    fn invalid_choices_redisplay_the_same_menu() {
        let dir = tempfile::tempdir().unwrap();
        let script = "9\n3\nboss\nsecret\n0\n5\n4\n";
        let (_, output) = run_script(dir.path(), script);

        assert!(output.contains("Invalid choice."));
        // Both menus were shown again after the invalid entries.
        assert!(output.matches("Welcome! Please choose an option:").count() >= 2);
        assert!(output.matches("Choose an option:").count() >= 2);
    }

    #[test]
    fn admin_query_with_no_data_prints_an_error_and_continues() {
        let dir = tempfile::tempdir().unwrap();
        let script = "3\nboss\nsecret\n1\n5\n4\n";
        let (_, output) = run_script(dir.path(), script);
        assert!(output.contains("Error:"));
        // The admin menu came back after the failed query.
        assert!(output.matches("5. Log out").count() >= 2);
    }

    #[test]
    fn invalid_price_reprompts_without_recording() {
        let dir = tempfile::tempdir().unwrap();
        let script = "1\nalice\npw\n\
                      2\nalice\npw\nWidget\nfree\nlogout\n\
                      4\n";
        let (stores, output) = run_script(dir.path(), script);

        assert!(output.contains("Invalid price, sale not recorded."));
        assert!(stores.sales.read_or_default().unwrap().is_empty());
    }
}
