//! # Console Report
//!
//! Renders a classification for people (Swedish text, one line per
//! sub-check) or for machines (JSON). Rendering is pure; the caller prints.

use serde::Serialize;

use svid_core::{
    Attempt, Check, CheckOutcome, Classification, FormatError, IdentifierKind, Rejection,
};

const BANNER: &str = "------------------------------------------";

/// Swedish name of an identifier kind.
pub fn kind_name(kind: IdentifierKind) -> &'static str {
    match kind {
        IdentifierKind::PersonalNumber => "personnummer",
        IdentifierKind::CoordinationNumber => "samordningsnummer",
        IdentifierKind::OrganizationNumber => "organisationsnummer",
        IdentifierKind::Invalid => "ogiltigt nummer",
    }
}

/// Swedish text for a format error.
pub fn format_error_text(err: &FormatError) -> &'static str {
    match err {
        FormatError::InvalidLength { .. } => {
            "Ogiltigt format, nummret måste innehålla mellan 10 och 13 tecken"
        }
        FormatError::InvalidCharacter { .. } => {
            "Ogiltigt format: Numret måste följa något av formaten \
             YYMMDDXXXK, YYMMDD-XXXK, YYYYMMDDXXXK eller YYYYMMDD-XXXK"
        }
    }
}

fn check_line(kind: IdentifierKind, outcome: CheckOutcome) -> &'static str {
    match (outcome.check, outcome.passed) {
        (Check::Date, true) => "Giltigt datum",
        (Check::Date, false) if kind == IdentifierKind::CoordinationNumber => {
            "Ogiltigt datum (-60)"
        }
        (Check::Date, false) => "Ogiltigt datum",
        (Check::CheckDigit, true) => "Giltig kontrollsiffra",
        (Check::CheckDigit, false) => "Ogiltig kontrollsiffra",
        (Check::LeadingPair, true) => "Giltigt inledande sifferpar",
        (Check::LeadingPair, false) => "Ogiltigt inledande sifferpar",
        (Check::MiddlePair, true) => "Mittersta sifferparet är minst 20",
        (Check::MiddlePair, false) => "Mittersta sifferparet är mindre än 20",
    }
}

fn push_attempt(out: &mut String, attempt: &Attempt) {
    out.push_str(&format!("\nValiderar {}:\n", kind_name(attempt.kind)));
    for outcome in &attempt.checks {
        out.push_str(&format!("    - {}\n", check_line(attempt.kind, *outcome)));
    }
}

/// Human-readable report, newline terminated.
pub fn render_text(raw: &str, outcome: &Result<Classification, FormatError>) -> String {
    let mut out = String::new();
    out.push_str(BANNER);
    out.push('\n');
    out.push_str(&format!("Påbörjar validation av nummer: {raw}\n"));
    out.push_str("    - Nummret är av giltigt format: ");

    let classification = match outcome {
        Ok(c) => c,
        Err(err) => {
            out.push_str("false\n");
            out.push_str(&format!("Fel: {}\n", format_error_text(err)));
            return out;
        }
    };
    out.push_str("true\n");

    for attempt in &classification.attempts {
        push_attempt(&mut out, attempt);
    }

    match classification.kind {
        IdentifierKind::Invalid => out.push_str(&format!("\nNummer {raw} är ogiltigt\n")),
        kind => out.push_str(&format!(
            "Nummer {raw} är ett giltigt {}\n",
            kind_name(kind)
        )),
    }
    out
}

/// One branch in the JSON report.
#[derive(Debug, Serialize)]
pub struct JsonAttempt<'a> {
    pub kind: IdentifierKind,
    pub ok: bool,
    pub reason: Option<Rejection>,
    pub checks: &'a [CheckOutcome],
}

/// Machine-readable report.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub input: &'a str,
    pub valid_format: bool,
    pub kind: Option<IdentifierKind>,
    pub attempts: Vec<JsonAttempt<'a>>,
    pub error: Option<String>,
}

impl<'a> JsonReport<'a> {
    /// Build the report for one classification outcome.
    pub fn new(raw: &'a str, outcome: &'a Result<Classification, FormatError>) -> Self {
        match outcome {
            Ok(c) => Self {
                input: raw,
                valid_format: true,
                kind: Some(c.kind),
                attempts: c
                    .attempts
                    .iter()
                    .map(|a| JsonAttempt {
                        kind: a.kind,
                        ok: a.is_match(),
                        reason: a.rejection(),
                        checks: &a.checks,
                    })
                    .collect(),
                error: None,
            },
            Err(err) => Self {
                input: raw,
                valid_format: false,
                kind: None,
                attempts: Vec::new(),
                error: Some(err.to_string()),
            },
        }
    }
}

/// Pretty-printed JSON report.
pub fn render_json(
    raw: &str,
    outcome: &Result<Classification, FormatError>,
) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport::new(raw, outcome))
}
