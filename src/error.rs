//! Error types returned by parsing, binary decoding, and scanning.

use thiserror::Error;

/// Error parsing an invalid string representation of UUID.
///
/// Carries the offending input so callers can report it.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Error)]
#[error("uuid: parsing {input:?}: {kind}")]
pub struct ParseError {
    input: String,
    kind: ParseErrorKind,
}

impl ParseError {
    pub(crate) fn new(input: impl Into<String>, kind: ParseErrorKind) -> Self {
        Self {
            input: input.into(),
            kind,
        }
    }

    pub(crate) fn from_ascii(input: &[u8], kind: ParseErrorKind) -> Self {
        Self::new(String::from_utf8_lossy(input), kind)
    }

    /// Returns the string that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Returns the reason for the failure.
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }
}

/// The reason a string could not be parsed.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Error)]
#[non_exhaustive]
pub enum ParseErrorKind {
    /// The strict form was given a string that is not 36 characters long.
    #[error("expected 36-character hyphenated format")]
    InvalidLength,

    /// The standard form lacks a hyphen at one of positions 8, 13, 18, and 23.
    #[error("expected hyphens at positions 8, 13, 18, 23")]
    InvalidHyphens,

    /// A 45-character input does not start with `urn:uuid:`.
    #[error("expected urn:uuid: prefix")]
    InvalidUrnPrefix,

    /// A 38-character input is not wrapped in `{` and `}`.
    #[error("expected braces")]
    InvalidBraces,

    /// The body of a URN or braced input lacks a hyphen at a required position.
    #[error("expected hyphens in UUID portion")]
    InvalidHyphensInBody,

    /// A digit position holds a non-hexadecimal character.
    #[error("invalid hex character")]
    InvalidHex,

    /// The input length matches none of the lenient forms.
    #[error("unrecognized UUID format")]
    UnrecognizedFormat,
}

/// Error constructing a UUID from a byte slice that is not 16 bytes long.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Error)]
#[error("uuid: unexpected length {actual}, want {expected} bytes")]
pub struct LengthError {
    actual: usize,
    expected: usize,
}

impl LengthError {
    pub(crate) const fn new(actual: usize) -> Self {
        Self {
            actual,
            expected: 16,
        }
    }

    /// Returns the length that was received.
    pub const fn actual(&self) -> usize {
        self.actual
    }

    /// Returns the length that was required.
    pub const fn expected(&self) -> usize {
        self.expected
    }
}

/// Error scanning a UUID from an external (e.g., database) value.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Error)]
pub enum ScanError {
    /// The value was textual but not a recognized UUID form.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The value was of a kind that cannot hold a UUID.
    #[error("uuid: cannot scan {found} into UUID")]
    TypeMismatch {
        /// Name of the kind of value received.
        found: &'static str,
    },
}
