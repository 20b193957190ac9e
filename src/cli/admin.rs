//! The admin login and query menu.

use crate::cli::console::Console;
use crate::cli::surface;
use crate::config::AppConfig;
use crate::core::aggregate::Extremum;
use crate::core::{auth, report};
use crate::entities::timestamp;
use crate::errors::Result;
use crate::store::Stores;
use std::io::{BufRead, Write};

/// Checks the configured admin credentials, then loops over the query menu.
///
/// Domain errors from a query (no data yet, dangling employee id) are printed
/// and the menu is shown again; only I/O errors propagate.
pub fn admin_flow<R: BufRead, W: Write>(
    config: &AppConfig,
    stores: &Stores,
    console: &mut Console<R, W>,
) -> Result<()> {
    let username = console.prompt("Admin Username: ")?;
    let password = console.prompt("Admin Password: ")?;
    if auth::verify_admin(&config.admin, &username, &password).is_err() {
        return console.say("Invalid credentials or not an admin.");
    }

    console.say("Welcome, Admin!")?;
    loop {
        console.say("Choose an option:")?;
        console.say("1. Best sales employee")?;
        console.say("2. Worst sales employee")?;
        console.say("3. Employee with most hours")?;
        console.say("4. Employee with least hours")?;
        console.say("5. Log out")?;

        let choice = console.prompt("Enter choice (1, 2, 3, 4, or 5): ")?;
        let outcome = match choice.as_str() {
            "1" => show_sales(stores, console, Extremum::Max),
            "2" => show_sales(stores, console, Extremum::Min),
            "3" => show_hours(stores, console, Extremum::Max),
            "4" => show_hours(stores, console, Extremum::Min),
            "5" => break,
            _ => console.say("Invalid choice."),
        };
        surface(console, outcome)?;
    }
    Ok(())
}

fn show_sales<R: BufRead, W: Write>(
    stores: &Stores,
    console: &mut Console<R, W>,
    select: Extremum,
) -> Result<()> {
    let sales = stores.sales.read_or_default()?;
    let roster = stores.employees.read_or_default()?;
    let summary = report::sales_extremum(&sales, &roster, select)?;

    let label = match select {
        Extremum::Max => "Best",
        Extremum::Min => "Worst",
    };
    console.say(&format!("{label} Sales Employee: {}", summary.username))?;
    console.say(&format!("Total Sales Amount: {:.2}", summary.total))?;
    console.say("Sales Details:")?;
    for sale in &summary.line_items {
        console.say(&format!(
            " - Product: {}, Price: {:.2}, Date: {}",
            sale.product_name,
            sale.total_price,
            timestamp::render(sale.sale_time)
        ))?;
    }
    Ok(())
}

fn show_hours<R: BufRead, W: Write>(
    stores: &Stores,
    console: &mut Console<R, W>,
    select: Extremum,
) -> Result<()> {
    let sessions = stores.work_sessions.read_or_default()?;
    let roster = stores.employees.read_or_default()?;
    let summary = report::hours_extremum(&sessions, &roster, select)?;

    let label = match select {
        Extremum::Max => "Most",
        Extremum::Min => "Least",
    };
    console.say(&format!(
        "Employee with {label} Hours: {}",
        summary.username
    ))?;
    console.say(&format!("Total Hours Worked: {:.2}", summary.total_hours))
}
