//! `Shiftbook` - an employee time-and-sales tracker over flat CSV files.
//!
//! Employees register, log work sessions, and record sales; an administrator
//! queries aggregate statistics (best/worst salesperson, most/least hours).
//! Persistence is a generic record store over delimited-text files; every
//! mutation reads the whole collection, appends in memory, and rewrites the
//! file. Nothing here is thread-safe and no concurrent access to the data
//! files is supported.

// Deny the most critical lints that could lead to bugs or security issues
#![deny(
    // Security and correctness
    unsafe_code,
    unsafe_op_in_unsafe_fn,

    // Code quality - things that are almost always bugs
    unreachable_code,
    unreachable_patterns,
    unused_must_use,

    // Documentation - broken links are bugs
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
)]
// Warn on things that should be fixed but aren't necessarily bugs
#![warn(
    missing_docs,

    // Clippy categories for overall code quality
    clippy::all,
    clippy::pedantic,

    // Correctness
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::exit,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,

    // Style consistency
    clippy::enum_glob_use,
    clippy::inconsistent_struct_constructor,
    clippy::must_use_candidate,
    clippy::redundant_closure_for_method_calls,
    clippy::semicolon_if_nothing_returned,
    clippy::wildcard_imports,

    // Future compatibility
    future_incompatible,
    rust_2018_idioms,
)]
#![allow(
    clippy::module_name_repetitions,  // Common pattern in Rust
    clippy::missing_errors_doc,        // Will add gradually
    clippy::missing_panics_doc,        // Will add gradually
)]

/// Interactive menus - the Session Controller over stdin/stdout
pub mod cli;
/// Configuration: data-file paths and admin credentials
pub mod config;
/// Framework-agnostic business logic - aggregation, auth, reports, mutations
pub mod core;
/// Domain record definitions
pub mod entities;
/// Unified error types and result handling
pub mod errors;
/// The file-backed Record Store
pub mod store;

#[cfg(test)]
pub mod test_utils;
