//! # Date Check
//!
//! Strict calendar validation of the leading date field. `YYYYMMDD` and
//! `YYMMDD` are accepted; months and days never roll over into the next
//! month or year.
//!
//! Two-digit years resolve into 2000–2099, so `000229` is a real date and
//! `230229` is not.

use chrono::NaiveDate;

/// Base century for two-digit years.
const TWO_DIGIT_YEAR_BASE: i32 = 2000;

/// Resolve `digits` to a calendar date, or `None` if it is not one.
pub fn parse_date(digits: &str) -> Option<NaiveDate> {
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let (year, rest) = match digits.len() {
        8 => (digits[..4].parse::<i32>().ok()?, &digits[4..]),
        6 => (
            TWO_DIGIT_YEAR_BASE + digits[..2].parse::<i32>().ok()?,
            &digits[2..],
        ),
        _ => return None,
    };
    let month = rest[..2].parse::<u32>().ok()?;
    let day = rest[2..].parse::<u32>().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)
}

/// True iff `digits` is a real `YYYYMMDD` or `YYMMDD` date.
pub fn validate_date(digits: &str) -> bool {
    let date = parse_date(digits);
    tracing::trace!(digits, ok = date.is_some(), "date check");
    date.is_some()
}
