//! # Classification
//!
//! Decides which kind of identifier an input is. After the format gate the
//! branches run in a fixed order and stop at the first match:
//!
//! 1. **Personal identity number**: the date field is a real date and the
//!    check digit holds.
//! 2. **Coordination number**: as above, but the day field carries +60, so
//!    the day-tens digit is shifted down by 6 before the date check. The
//!    shift is applied to a copy; the check digit is always computed over the
//!    original characters.
//! 3. **Organization number**: four-digit-year inputs must start with `16`,
//!    the pair at `2 + offset` must be at least 20, and the check digit holds.
//!
//! If nothing matches the result is [`IdentifierKind::Invalid`], a normal
//! outcome rather than an error. Every branch that was tried is kept in
//! [`Classification::attempts`] together with the sub-checks it ran, so a
//! caller can report exactly which rule failed.

use serde::{Deserialize, Serialize};

use crate::checksum::validate_check_digit;
use crate::date::validate_date;
use crate::error::FormatError;
use crate::format::Identifier;
use crate::log::{NoopLog, ValidationLog};

/// Which identifier an input turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierKind {
    /// Personnummer.
    PersonalNumber,
    /// Samordningsnummer.
    CoordinationNumber,
    /// Organisationsnummer.
    OrganizationNumber,
    /// Well-formed, but none of the above.
    Invalid,
}

impl IdentifierKind {
    /// The kinds that have a branch, in the order they are tried.
    pub const CANDIDATES: [IdentifierKind; 3] = [
        Self::PersonalNumber,
        Self::CoordinationNumber,
        Self::OrganizationNumber,
    ];

    /// True for every kind except [`IdentifierKind::Invalid`].
    pub fn is_valid(self) -> bool {
        !matches!(self, Self::Invalid)
    }
}

impl std::fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::PersonalNumber => "personal identity number",
            Self::CoordinationNumber => "coordination number",
            Self::OrganizationNumber => "organization number",
            Self::Invalid => "invalid",
        };
        f.write_str(s)
    }
}

/// A single rule evaluated inside a branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Check {
    /// The date field is a real calendar date.
    Date,
    /// The Luhn-style check digit matches.
    CheckDigit,
    /// Four-digit-year organization numbers start with `16`.
    LeadingPair,
    /// The organization "month" pair is at least 20.
    MiddlePair,
}

impl Check {
    /// The rejection reported when this check fails.
    pub fn rejection(self) -> Rejection {
        match self {
            Self::Date => Rejection::DateInvalid,
            Self::CheckDigit => Rejection::ChecksumInvalid,
            Self::LeadingPair => Rejection::LeadingPairInvalid,
            Self::MiddlePair => Rejection::MiddlePairInvalid,
        }
    }
}

/// Why a branch did not match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    DateInvalid,
    ChecksumInvalid,
    LeadingPairInvalid,
    MiddlePairInvalid,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::DateInvalid => "invalid date",
            Self::ChecksumInvalid => "invalid check digit",
            Self::LeadingPairInvalid => "invalid leading digit pair",
            Self::MiddlePairInvalid => "middle digit pair is less than 20",
        };
        f.write_str(s)
    }
}

/// Outcome of one sub-check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOutcome {
    pub check: Check,
    pub passed: bool,
}

/// One branch as it was tried: the sub-checks in the order they ran,
/// stopping at the first failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attempt {
    pub kind: IdentifierKind,
    pub checks: Vec<CheckOutcome>,
}

impl Attempt {
    fn new(kind: IdentifierKind) -> Self {
        Self {
            kind,
            checks: Vec::with_capacity(3),
        }
    }

    /// Record a sub-check; returns whether it passed so branches can chain
    /// with `&&`.
    fn run(&mut self, input: &Identifier, check: Check, passed: bool) -> bool {
        tracing::debug!(
            input = %input,
            branch = %self.kind,
            check = ?check,
            ok = passed,
            "sub-check"
        );
        self.checks.push(CheckOutcome { check, passed });
        passed
    }

    /// The first failed check, if any.
    pub fn rejection(&self) -> Option<Rejection> {
        self.checks
            .iter()
            .find(|c| !c.passed)
            .map(|c| c.check.rejection())
    }

    /// True when every sub-check passed.
    pub fn is_match(&self) -> bool {
        self.rejection().is_none()
    }

    /// The branch result as a `Result`.
    pub fn result(&self) -> Result<(), Rejection> {
        self.rejection().map_or(Ok(()), Err)
    }
}

/// Full result of classifying one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub identifier: Identifier,
    pub kind: IdentifierKind,
    pub attempts: Vec<Attempt>,
}

impl Classification {
    /// True unless the result is [`IdentifierKind::Invalid`].
    pub fn is_valid(&self) -> bool {
        self.kind.is_valid()
    }

    /// The attempt for `kind`, if that branch was reached.
    pub fn attempt(&self, kind: IdentifierKind) -> Option<&Attempt> {
        self.attempts.iter().find(|a| a.kind == kind)
    }
}

/// Run the personal identity number branch.
pub fn try_personal(id: &Identifier) -> Attempt {
    let mut attempt = Attempt::new(IdentifierKind::PersonalNumber);
    let _ = attempt.run(id, Check::Date, validate_date(id.date_part()))
        && attempt.run(
            id,
            Check::CheckDigit,
            validate_check_digit(id.as_bytes(), id.offset()),
        );
    attempt
}

/// Run the coordination number branch.
pub fn try_coordination(id: &Identifier) -> Attempt {
    let mut attempt = Attempt::new(IdentifierKind::CoordinationNumber);
    let _ = attempt.run(id, Check::Date, coordination_date_valid(id))
        && attempt.run(
            id,
            Check::CheckDigit,
            validate_check_digit(id.as_bytes(), id.offset()),
        );
    attempt
}

/// Run the organization number branch.
pub fn try_organization(id: &Identifier) -> Attempt {
    let bytes = id.as_bytes();
    let mut attempt = Attempt::new(IdentifierKind::OrganizationNumber);
    let leading_ok = !id.has_century() || bytes.starts_with(b"16");
    let middle_ok = !matches!(bytes[2 + id.offset()], b'0' | b'1');
    let _ = attempt.run(id, Check::LeadingPair, leading_ok)
        && attempt.run(id, Check::MiddlePair, middle_ok)
        && attempt.run(
            id,
            Check::CheckDigit,
            validate_check_digit(bytes, id.offset()),
        );
    attempt
}

/// Personal identity number rules, as a plain result.
pub fn check_personal(id: &Identifier) -> Result<(), Rejection> {
    try_personal(id).result()
}

/// Coordination number rules, as a plain result.
pub fn check_coordination(id: &Identifier) -> Result<(), Rejection> {
    try_coordination(id).result()
}

/// Organization number rules, as a plain result.
pub fn check_organization(id: &Identifier) -> Result<(), Rejection> {
    try_organization(id).result()
}

/// Date check for coordination numbers: the day field minus 60.
///
/// Works on a copy of the date characters. A day-tens digit below `6` turns
/// into a non-digit and therefore fails the date check.
fn coordination_date_valid(id: &Identifier) -> bool {
    let mut date = id.date_part().as_bytes().to_vec();
    // date_part is all digits, so the byte is >= b'0' and the subtraction
    // cannot underflow.
    date[4 + id.offset()] -= 6;
    std::str::from_utf8(&date).is_ok_and(validate_date)
}

fn try_kind(kind: IdentifierKind, id: &Identifier) -> Option<Attempt> {
    match kind {
        IdentifierKind::PersonalNumber => Some(try_personal(id)),
        IdentifierKind::CoordinationNumber => Some(try_coordination(id)),
        IdentifierKind::OrganizationNumber => Some(try_organization(id)),
        IdentifierKind::Invalid => None,
    }
}

/// Classifies identifiers and reports failed checks to an injected log.
#[derive(Debug, Clone, Default)]
pub struct Validator<L = NoopLog> {
    log: L,
}

impl<L: ValidationLog> Validator<L> {
    /// Create a validator that records failures to `log`.
    pub fn new(log: L) -> Self {
        Self { log }
    }

    /// The log this validator records to.
    pub fn log(&self) -> &L {
        &self.log
    }

    /// Classify `raw`.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError`] when `raw` fails the format gate. No branch
    /// runs in that case.
    pub fn classify(&self, raw: &str) -> Result<Classification, FormatError> {
        let identifier = match Identifier::parse(raw) {
            Ok(id) => id,
            Err(err) => {
                tracing::debug!(input = raw, error = %err, "format check failed");
                self.log.record(&format!("{err}: {raw}"));
                return Err(err);
            }
        };

        let mut kind = IdentifierKind::Invalid;
        let mut attempts = Vec::with_capacity(IdentifierKind::CANDIDATES.len());
        for candidate in IdentifierKind::CANDIDATES {
            let Some(attempt) = try_kind(candidate, &identifier) else {
                continue;
            };
            let matched = attempt.is_match();
            if let Some(rejection) = attempt.rejection() {
                self.log
                    .record(&format!("{rejection} for {candidate}: {identifier}"));
            }
            attempts.push(attempt);
            if matched {
                kind = candidate;
                break;
            }
        }

        tracing::debug!(input = %identifier, kind = %kind, "classified");
        Ok(Classification {
            identifier,
            kind,
            attempts,
        })
    }
}

/// Classify `raw` without recording failures anywhere.
///
/// # Errors
///
/// See [`Validator::classify`].
pub fn classify(raw: &str) -> Result<Classification, FormatError> {
    Validator::new(NoopLog).classify(raw)
}
