//! Registration and the employee login/sale/logout flow.

use crate::cli::console::Console;
use crate::core::{auth, ledger};
use crate::entities::{Sale, WorkSession};
use crate::errors::{Error, Result};
use crate::store::Stores;
use std::io::{BufRead, Write};

/// Prompts for credentials and registers a new employee.
pub fn register_flow<R: BufRead, W: Write>(
    stores: &Stores,
    console: &mut Console<R, W>,
) -> Result<()> {
    let username = console.prompt("Enter a username: ")?;
    let password = console.prompt("Enter a password: ")?;
    let employee = ledger::register_employee(&stores.employees, &username, &password)?;
    console.say(&format!(
        "Employee {} registered successfully.",
        employee.username
    ))
}

/// Logs an employee in, records sales until the `logout` sentinel, then
/// appends the completed work session.
pub fn login_flow<R: BufRead, W: Write>(
    stores: &Stores,
    console: &mut Console<R, W>,
) -> Result<()> {
    let username = console.prompt("Username: ")?;
    let password = console.prompt("Password: ")?;

    let roster = stores.employees.read_or_default()?;
    let employee = match auth::authenticate(&roster, &username, &password) {
        Ok(employee) => employee.clone(),
        Err(Error::Authentication { .. }) => {
            return console.say("Invalid credentials.");
        }
        Err(e) => return Err(e),
    };

    let login_time = chrono::Local::now().naive_local();
    console.say("Logged in successfully.")?;

    loop {
        let product = console.prompt("Enter product name (or 'logout' to log out): ")?;
        if product.eq_ignore_ascii_case("logout") {
            break;
        }

        let price_text = console.prompt("Enter total price: ")?;
        let Ok(total_price) = price_text.parse::<f64>() else {
            console.say("Invalid price, sale not recorded.")?;
            continue;
        };

        let confirmation = format!("Sale recorded: {product} for {total_price:.2}");
        ledger::append_sale(
            &stores.sales,
            Sale {
                employee_id: employee.id,
                product_name: product,
                total_price,
                sale_time: chrono::Local::now().naive_local(),
            },
        )?;
        console.say(&confirmation)?;
    }

    ledger::append_work_session(
        &stores.work_sessions,
        WorkSession {
            employee_id: employee.id,
            employee_name: employee.username.clone(),
            login_time,
            logout_time: Some(chrono::Local::now().naive_local()),
        },
    )?;
    console.say("Work session recorded.")
}
