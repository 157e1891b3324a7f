//! # svid-cli: Swedish Identifier Validator CLI
//!
//! Thin command-line layer over `svid-core`. Parses arguments, wires the
//! audit log sink into the validator, and prints the verdict.
//!
//! ## Modules
//!
//! - `check`: argument types and the single validation run
//! - `report`: Swedish console report and JSON output
//! - `file_log`: append-only audit log file
//!
//! ## Crate Policy
//!
//! - No validation rules here; every decision is made in `svid-core`.
//! - Rendering is pure and returns strings; only `check` prints.

pub mod check;
pub mod file_log;
pub mod report;
