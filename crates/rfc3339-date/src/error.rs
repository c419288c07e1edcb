//! Error types for RFC 3339 parsing and JSON decoding.

use thiserror::Error;

/// What part of an RFC 3339 date-time failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormatErrorKind {
    #[error("year must be exactly four digits")]
    Year,

    #[error("month must be two digits in 01-12")]
    Month,

    #[error("day must be two digits and exist in the given month")]
    Day,

    #[error("hour must be two digits in 00-23")]
    Hour,

    #[error("minute must be two digits in 00-59")]
    Minute,

    #[error("second must be two digits in 00-59")]
    Second,

    #[error("fractional seconds need at least one digit after '.'")]
    Fraction,

    #[error("UTC offset must be 'Z' or ±hh:mm with hour 00-23 and minute 00-59")]
    Offset,

    #[error("expected {expected:?} at byte {position}")]
    Separator { expected: char, position: usize },

    #[error("unexpected trailing characters at byte {position}")]
    Trailing { position: usize },
}

/// A string that is not a strict RFC 3339 date-time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid RFC 3339 date-time {input:?}: {kind}")]
pub struct FormatError {
    pub input: String,
    pub kind: FormatErrorKind,
}

impl FormatError {
    pub(crate) fn new(input: &str, kind: FormatErrorKind) -> Self {
        Self {
            input: input.to_owned(),
            kind,
        }
    }
}

/// Error while decoding a timestamp from JSON.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The data is not a JSON string literal.
    #[error("timestamp is not a JSON string: {0}")]
    Json(#[from] serde_json::Error),

    /// The JSON string is not RFC 3339.
    #[error(transparent)]
    Format(#[from] FormatError),
}

impl DecodeError {
    pub fn is_json(&self) -> bool {
        matches!(self, DecodeError::Json(_))
    }

    pub fn is_format(&self) -> bool {
        matches!(self, DecodeError::Format(_))
    }

    /// Returns the format error, if the JSON itself was well-formed.
    pub fn as_format(&self) -> Option<&FormatError> {
        match self {
            DecodeError::Format(err) => Some(err),
            DecodeError::Json(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_message_names_input() {
        let err = FormatError::new("not-a-date", FormatErrorKind::Year);
        assert_eq!(
            err.to_string(),
            "invalid RFC 3339 date-time \"not-a-date\": year must be exactly four digits"
        );
    }

    #[test]
    fn test_separator_message() {
        let err = FormatError::new(
            "2023-06-15 14:30:00Z",
            FormatErrorKind::Separator {
                expected: 'T',
                position: 10,
            },
        );
        assert!(err.to_string().ends_with("expected 'T' at byte 10"));
    }

    #[test]
    fn test_decode_error_kinds() {
        let format: DecodeError = FormatError::new("x", FormatErrorKind::Year).into();
        assert!(format.is_format());
        assert!(!format.is_json());
        assert_eq!(format.as_format().map(|e| e.kind), Some(FormatErrorKind::Year));

        let json: DecodeError = serde_json::from_str::<String>("1").unwrap_err().into();
        assert!(json.is_json());
        assert!(json.as_format().is_none());
    }
}
