//! # Check Digit
//!
//! Luhn-style check digit over the serial body of an identifier.
//!
//! Starting at `offset`, every digit up to (not including) the final
//! character is weighted 2, 1, 2, 1, … from the left; products of two digits
//! contribute their digit sum. The check digit is `(10 - sum % 10) % 10`.
//!
//! Non-digit characters inside the range (the separator) are skipped and do
//! **not** advance the 2-1 alternation. Check digits of issued numbers are
//! computed under exactly this rule.

/// Weighted digit sum of `body`, skipping non-digits without advancing the
/// weight alternation.
fn weighted_sum(body: &[u8]) -> u32 {
    let mut sum = 0;
    let mut double = true;
    for &b in body {
        if !b.is_ascii_digit() {
            continue;
        }
        let mut n = u32::from(b - b'0');
        if double {
            n *= 2;
        }
        sum += n / 10 + n % 10;
        double = !double;
    }
    sum
}

/// Expected check digit for `body`.
pub fn check_digit(body: &[u8]) -> u8 {
    // weighted_sum(..) % 10 < 10, so the result always fits.
    ((10 - weighted_sum(body) % 10) % 10) as u8
}

/// True iff the last character of `number` is the check digit of
/// `number[offset..len - 1]`.
///
/// Returns false when the range is empty or the final character is not a
/// digit.
pub fn validate_check_digit(number: &[u8], offset: usize) -> bool {
    let Some((&last, body)) = number.split_last() else {
        return false;
    };
    if !last.is_ascii_digit() || offset >= number.len() {
        return false;
    }
    let body = body.get(offset..).unwrap_or_default();
    let expected = check_digit(body);
    let ok = expected == last - b'0';
    tracing::trace!(offset, expected, actual = last - b'0', ok, "check digit");
    ok
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_personal_number() {
        assert!(validate_check_digit(b"8507099805", 0));
        assert!(!validate_check_digit(b"8507099806", 0));
        assert!(!validate_check_digit(b"8507099804", 0));
    }

    #[test]
    fn offset_skips_century() {
        assert!(validate_check_digit(b"198507099805", 2));
        assert!(!validate_check_digit(b"198507099805", 0));
    }

    #[test]
    fn separator_does_not_shift_weights() {
        assert!(validate_check_digit(b"850709-9805", 0));
        assert!(validate_check_digit(b"850709+9805", 0));
        assert!(validate_check_digit(b"19850709-9805", 2));
    }

    #[test]
    fn organization_numbers() {
        assert!(validate_check_digit(b"5560360793", 0));
        assert!(validate_check_digit(b"165560360793", 2));
        assert!(!validate_check_digit(b"5560360794", 0));
    }

    #[test]
    fn coordination_number() {
        assert!(validate_check_digit(b"8507699802", 0));
    }

    #[test]
    fn computes_expected_digit() {
        assert_eq!(check_digit(b"850709980"), 5);
        assert_eq!(check_digit(b"556036079"), 3);
        assert_eq!(check_digit(b"850769980"), 2);
        assert_eq!(check_digit(b""), 0);
    }

    #[test]
    fn degenerate_inputs() {
        assert!(!validate_check_digit(b"", 0));
        assert!(!validate_check_digit(b"850709980-", 0));
        assert!(!validate_check_digit(b"12", 5));
        // Only the check digit in range: sum is 0, expected digit is 0.
        assert!(validate_check_digit(b"0", 0));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Appending the computed digit always validates.
        #[test]
        fn appended_digit_validates(body in "[0-9]{9,11}") {
            let mut number = body.clone().into_bytes();
            number.push(b'0' + check_digit(body.as_bytes()));
            prop_assert!(validate_check_digit(&number, 0));
        }

        /// Any other final digit is rejected.
        #[test]
        fn single_digit_error_detected(body in "[0-9]{9}", bump in 1u8..10) {
            let right = check_digit(body.as_bytes());
            let mut number = body.into_bytes();
            number.push(b'0' + (right + bump) % 10);
            prop_assert!(!validate_check_digit(&number, 0));
        }

        /// Inserting a separator anywhere in the body changes nothing.
        #[test]
        fn separator_is_transparent(body in "[0-9]{9}", pos in 0usize..=9, plus in any::<bool>()) {
            let mut with_sep = body.clone().into_bytes();
            with_sep.insert(pos, if plus { b'+' } else { b'-' });
            prop_assert_eq!(check_digit(&with_sep), check_digit(body.as_bytes()));
        }
    }
}
