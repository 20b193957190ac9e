//! Core business logic, independent of the interactive layer.
//!
//! Everything here works on in-memory collections or through a
//! [`RecordStore`](crate::store::RecordStore); formatting and prompting live
//! in [`cli`](crate::cli).

/// Per-key sums and extremum selection.
pub mod aggregate;
/// Credential checks for employees and the administrator.
pub mod auth;
/// Registration and read-append-save mutations.
pub mod ledger;
/// Structured admin reports over sales and work sessions.
pub mod report;
