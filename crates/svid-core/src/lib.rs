//! # svid-core: Swedish National Identifier Validation
//!
//! Validates a single string against the three Swedish national identifier
//! formats and reports which one (if any) it satisfies:
//!
//! - **Personnummer** (personal identity number): birth date plus serial and
//!   check digit.
//! - **Samordningsnummer** (coordination number): as a personal identity
//!   number, with 60 added to the day of month.
//! - **Organisationsnummer** (organization number): `16` century prefix in
//!   the long form, middle pair of at least 20, same check digit rule.
//!
//! ## Pipeline
//!
//! 1. [`format`]: length and character gate, producing an [`Identifier`].
//! 2. [`date`]: strict calendar check of the date field.
//! 3. [`checksum`]: Luhn-style check digit.
//! 4. [`classify`]: the ordered personal → coordination → organization
//!    decision, returning a [`Classification`].
//!
//! Failures of individual rules are reported to an injected
//! [`ValidationLog`]; the caller owns the sink.
//!
//! ## Crate Policy
//!
//! - No global state. Every call is a pure function of its input plus the
//!   injected log.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod checksum;
pub mod classify;
pub mod date;
pub mod error;
pub mod format;
pub mod log;

// Re-export primary types for ergonomic imports.
pub use checksum::{check_digit, validate_check_digit};
pub use classify::{
    check_coordination, check_organization, check_personal, classify, Attempt, Check,
    CheckOutcome, Classification, IdentifierKind, Rejection, Validator,
};
pub use date::{parse_date, validate_date};
pub use error::{FormatError, ACCEPTED_SHAPES};
pub use format::{validate_format, Identifier, Separator};
pub use log::{NoopLog, TracingLog, ValidationLog};
