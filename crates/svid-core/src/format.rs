//! # Format Gate
//!
//! Structural checks that run before any semantic rule. An input passes when
//! it has 10–13 characters, every character is an ASCII digit, and the only
//! exception is a single `+` or `-` in the separator position of the 11- and
//! 13-character shapes:
//!
//! | Length | Shape           | Separator position | Offset |
//! |--------|-----------------|--------------------|--------|
//! | 10     | `YYMMDDXXXK`    | none               | 0      |
//! | 11     | `YYMMDD-XXXK`   | 6                  | 0      |
//! | 12     | `YYYYMMDDXXXK`  | none               | 2      |
//! | 13     | `YYYYMMDD-XXXK` | 8                  | 2      |
//!
//! The separator position is exempt, not mandatory: a digit there is also
//! accepted.

use serde::{Deserialize, Serialize};

use crate::error::FormatError;

/// Shortest accepted input.
pub const MIN_LEN: usize = 10;

/// Longest accepted input.
pub const MAX_LEN: usize = 13;

/// Separator between the date part and the serial part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Separator {
    /// `-`
    Hyphen,
    /// `+`
    Plus,
}

impl Separator {
    /// Map a character to a separator, if it is one.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '-' => Some(Self::Hyphen),
            '+' => Some(Self::Plus),
            _ => None,
        }
    }

    /// The character this separator is written as.
    pub fn as_char(self) -> char {
        match self {
            Self::Hyphen => '-',
            Self::Plus => '+',
        }
    }
}

/// Index at which a separator may appear for an input of `length` characters.
pub fn separator_position(length: usize) -> Option<usize> {
    match length {
        13 => Some(8),
        11 => Some(6),
        _ => None,
    }
}

/// Year-width offset for an input of `length` characters: 2 for the
/// four-digit-year shapes, 0 otherwise.
pub fn offset_for_len(length: usize) -> usize {
    if length >= 12 {
        2
    } else {
        0
    }
}

/// Check that `raw` has one of the accepted shapes.
///
/// # Errors
///
/// Returns [`FormatError::InvalidLength`] for inputs outside 10–13
/// characters, and [`FormatError::InvalidCharacter`] for the first character
/// that is neither a digit nor an exempt separator.
pub fn validate_format(raw: &str) -> Result<(), FormatError> {
    let length = raw.chars().count();
    if !(MIN_LEN..=MAX_LEN).contains(&length) {
        return Err(FormatError::InvalidLength { length });
    }

    let special = separator_position(length);
    for (position, character) in raw.chars().enumerate() {
        if Some(position) == special && Separator::from_char(character).is_some() {
            continue;
        }
        if !character.is_ascii_digit() {
            return Err(FormatError::InvalidCharacter {
                position,
                character,
            });
        }
    }

    Ok(())
}

/// An input that has passed the format gate.
///
/// Holds the original characters unchanged; the separator and offset are
/// derived once at construction. Because the gate only admits ASCII, byte
/// indices and character indices coincide.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    raw: String,
    separator: Option<Separator>,
    offset: usize,
}

impl Identifier {
    /// Run the format gate and derive the parsed view.
    ///
    /// # Errors
    ///
    /// Returns the [`FormatError`] produced by [`validate_format`].
    pub fn parse(raw: impl Into<String>) -> Result<Self, FormatError> {
        let raw = raw.into();
        validate_format(&raw)?;

        let length = raw.len();
        let separator = separator_position(length)
            .and_then(|pos| raw[pos..].chars().next())
            .and_then(Separator::from_char);

        Ok(Self {
            offset: offset_for_len(length),
            separator,
            raw,
        })
    }

    /// The input exactly as given.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The input as ASCII bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.raw.as_bytes()
    }

    /// Number of characters, separator included.
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Always false; the gate rejects short inputs. Present for API symmetry
    /// with [`Identifier::len`].
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// 0 for two-digit-year shapes, 2 for four-digit-year shapes.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The separator, when the exempt position actually holds one.
    pub fn separator(&self) -> Option<Separator> {
        self.separator
    }

    /// True for the 12- and 13-character shapes.
    pub fn has_century(&self) -> bool {
        self.offset == 2
    }

    /// The leading `YYMMDD` or `YYYYMMDD` characters.
    pub fn date_part(&self) -> &str {
        &self.raw[..6 + self.offset]
    }

    /// All digits with the separator removed.
    pub fn digits(&self) -> String {
        self.raw.chars().filter(|c| c.is_ascii_digit()).collect()
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

impl std::str::FromStr for Identifier {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Identifier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.raw)
    }
}

// Deserializes as a plain string and routes through `parse`, so a
// malformed value is rejected instead of silently accepted.
impl<'de> Deserialize<'de> for Identifier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(raw).map_err(serde::de::Error::custom)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any input outside 10–13 characters is rejected on length.
        #[test]
        fn out_of_range_lengths_rejected(s in "[0-9+-]{0,9}|[0-9+-]{14,24}") {
            let err = validate_format(&s).unwrap_err();
            prop_assert!(err.is_length());
        }

        /// Pure digit strings of accepted length always pass.
        #[test]
        fn digit_strings_pass(s in "[0-9]{10,13}") {
            prop_assert!(validate_format(&s).is_ok());
        }

        /// A letter anywhere is rejected at that position.
        #[test]
        fn letter_rejected_at_its_position(
            digits in "[0-9]{10,13}",
            pos in 0usize..13,
            letter in "[a-zA-Z]",
        ) {
            let pos = pos % digits.len();
            let mut s = digits.clone();
            s.replace_range(pos..pos + 1, &letter);
            prop_assert_eq!(validate_format(&s).unwrap_err().position(), Some(pos));
        }

        /// The gate never panics, whatever the input.
        #[test]
        fn never_panics(s in "\\PC{0,20}") {
            let _ = validate_format(&s);
            let _ = Identifier::parse(s);
        }
    }
}
