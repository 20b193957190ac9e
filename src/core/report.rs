//! Structured admin reports.
//!
//! These functions join an aggregate extremum back to the roster and return
//! structured data; the interactive layer decides how to print it.

use crate::core::aggregate::{Extremum, rank_by};
use crate::entities::{Employee, Sale, WorkSession};
use crate::errors::{Error, Result};

/// The employee with the best or worst summed sales.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesReport {
    /// Selected employee's id.
    pub employee_id: i64,
    /// Selected employee's username from the roster.
    pub username: String,
    /// Their summed sale prices.
    pub total: f64,
    /// Every sale of theirs, in file order.
    pub line_items: Vec<Sale>,
}

/// The employee with the most or least summed session hours.
#[derive(Debug, Clone, PartialEq)]
pub struct HoursReport {
    /// Selected employee's id.
    pub employee_id: i64,
    /// Selected employee's username from the roster.
    pub username: String,
    /// Their summed hours; open sessions count as zero.
    pub total_hours: f64,
}

/// Selects the employee with the extremal summed sale price.
///
/// # Errors
/// [`Error::EmptyCollection`] when there are no sales,
/// [`Error::UnknownEmployee`] when the winner's id is missing from the
/// roster.
pub fn sales_extremum(
    sales: &[Sale],
    roster: &[Employee],
    select: Extremum,
) -> Result<SalesReport> {
    let (employee_id, total) = rank_by(
        sales,
        |sale| sale.employee_id,
        |sale| sale.total_price,
        select,
    )?;
    let username = username_for(roster, employee_id)?;
    let line_items = sales
        .iter()
        .filter(|sale| sale.employee_id == employee_id)
        .cloned()
        .collect();
    Ok(SalesReport {
        employee_id,
        username,
        total,
        line_items,
    })
}

/// Selects the employee with the extremal summed session hours.
///
/// # Errors
/// [`Error::EmptyCollection`] when there are no sessions,
/// [`Error::UnknownEmployee`] when the winner's id is missing from the
/// roster.
pub fn hours_extremum(
    sessions: &[WorkSession],
    roster: &[Employee],
    select: Extremum,
) -> Result<HoursReport> {
    let (employee_id, total_hours) = rank_by(
        sessions,
        |session| session.employee_id,
        WorkSession::hours,
        select,
    )?;
    let username = username_for(roster, employee_id)?;
    Ok(HoursReport {
        employee_id,
        username,
        total_hours,
    })
}

fn username_for(roster: &[Employee], employee_id: i64) -> Result<String> {
    roster
        .iter()
        .find(|employee| employee.id == employee_id)
        .map(|employee| employee.username.clone())
        .ok_or(Error::UnknownEmployee { employee_id })
}
