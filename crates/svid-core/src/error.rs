//! # Error Types
//!
//! Structured errors for identifier validation, built with `thiserror`.
//!
//! Only structural problems are errors. A well-formed number whose date or
//! check digit is wrong is a normal negative result and is reported through
//! [`crate::classify::Rejection`], never through this module.

use thiserror::Error;

/// The four shapes accepted by the format gate, as shown to operators.
pub const ACCEPTED_SHAPES: &str = "YYMMDDXXXK, YYMMDD-XXXK, YYYYMMDDXXXK or YYYYMMDD-XXXK";

/// The input is not shaped like any Swedish identifier.
///
/// Raised before any date or checksum rule runs. Both variants carry the
/// offending input details so the CLI can report exactly what was wrong.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Fewer than 10 or more than 13 characters.
    #[error("invalid format: the number must contain between 10 and 13 characters, got {length} (expected one of {})", ACCEPTED_SHAPES)]
    InvalidLength {
        /// Character count of the rejected input.
        length: usize,
    },

    /// A character that is neither a digit nor a separator in the
    /// separator position.
    #[error("invalid format: unexpected {character:?} at position {position} (expected one of {})", ACCEPTED_SHAPES)]
    InvalidCharacter {
        /// Zero-based character index.
        position: usize,
        /// The rejected character.
        character: char,
    },
}

impl FormatError {
    /// True when the input was rejected for its length alone.
    pub fn is_length(&self) -> bool {
        matches!(self, Self::InvalidLength { .. })
    }

    /// Position of the offending character, if the error is about content.
    pub fn position(&self) -> Option<usize> {
        match self {
            Self::InvalidLength { .. } => None,
            Self::InvalidCharacter { position, .. } => Some(*position),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_list_all_shapes() {
        let errors = [
            FormatError::InvalidLength { length: 9 },
            FormatError::InvalidCharacter {
                position: 3,
                character: 'x',
            },
        ];
        for err in errors {
            let msg = err.to_string();
            for shape in ["YYMMDDXXXK", "YYMMDD-XXXK", "YYYYMMDDXXXK", "YYYYMMDD-XXXK"] {
                assert!(msg.contains(shape), "{msg:?} is missing {shape}");
            }
        }
    }

    #[test]
    fn length_message_states_bounds() {
        let msg = FormatError::InvalidLength { length: 14 }.to_string();
        assert!(msg.contains("between 10 and 13"));
        assert!(msg.contains("14"));
    }

    #[test]
    fn structured_accessors() {
        let len = FormatError::InvalidLength { length: 2 };
        assert!(len.is_length());
        assert_eq!(len.position(), None);

        let chr = FormatError::InvalidCharacter {
            position: 6,
            character: '/',
        };
        assert!(!chr.is_length());
        assert_eq!(chr.position(), Some(6));
    }
}
