//! Strict and lenient parsers.

use std::str;

use crate::error::{LengthError, ParseError, ParseErrorKind};
use crate::{hex, Uuid};

const URN_PREFIX: &[u8; 9] = b"urn:uuid:";

impl Uuid {
    /// Parses the standard 36-character 8-4-4-4-12 hexadecimal representation.
    ///
    /// Hexadecimal digits are case-insensitive. URN, braced, and compact forms are rejected; use
    /// [`Uuid::parse_lenient()`] for those.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfcuuid::Uuid;
    ///
    /// let x = Uuid::parse("6ba7b810-9dad-11d1-80b4-00c04fd430c8")?;
    /// assert_eq!(x, Uuid::NAMESPACE_DNS);
    /// assert!(Uuid::parse("{6ba7b810-9dad-11d1-80b4-00c04fd430c8}").is_err());
    /// # Ok::<(), rfcuuid::ParseError>(())
    /// ```
    pub fn parse(src: &str) -> Result<Self, ParseError> {
        Self::parse_ascii(src.as_bytes()).map_err(|kind| ParseError::new(src, kind))
    }

    /// Parses any of the following forms, dispatching on the input length:
    ///
    /// - Standard: `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx` (36 characters)
    /// - URN: `urn:uuid:xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx` (45 characters)
    /// - Braced: `{xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx}` (38 characters)
    /// - Compact: `xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx` (32 characters)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfcuuid::Uuid;
    ///
    /// let x = Uuid::parse_lenient("urn:uuid:6ba7b810-9dad-11d1-80b4-00c04fd430c8")?;
    /// let y = Uuid::parse_lenient("6BA7B8109DAD11D180B400C04FD430C8")?;
    /// assert_eq!(x, y);
    /// # Ok::<(), rfcuuid::ParseError>(())
    /// ```
    pub fn parse_lenient(src: &str) -> Result<Self, ParseError> {
        Self::parse_lenient_ascii(src.as_bytes())
    }

    /// Byte-slice counterpart of [`Uuid::parse_lenient()`], for text stored as raw bytes.
    pub fn parse_lenient_ascii(src: &[u8]) -> Result<Self, ParseError> {
        let result = match src.len() {
            36 => Self::parse_ascii(src),
            45 => {
                if src[..9] != URN_PREFIX[..] {
                    Err(ParseErrorKind::InvalidUrnPrefix)
                } else {
                    Self::parse_body(src, 9)
                }
            }
            38 => {
                if src[0] != b'{' || src[37] != b'}' {
                    Err(ParseErrorKind::InvalidBraces)
                } else {
                    Self::parse_body(src, 1)
                }
            }
            32 => hex::decode_compact(src, 0)
                .map(Self)
                .ok_or(ParseErrorKind::InvalidHex),
            _ => Err(ParseErrorKind::UnrecognizedFormat),
        };
        result.map_err(|kind| ParseError::from_ascii(src, kind))
    }

    /// Parses the standard form at compile time or panics.
    ///
    /// Intended for literals known to be valid; an invalid literal in a `const` context fails the
    /// build.
    ///
    /// # Panics
    ///
    /// Panics if `src` is not a valid 8-4-4-4-12 representation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfcuuid::Uuid;
    ///
    /// const ID: Uuid = Uuid::must_parse("01809424-3e59-7c05-9219-566f82fff672");
    /// assert_eq!(ID.to_string(), "01809424-3e59-7c05-9219-566f82fff672");
    /// ```
    pub const fn must_parse(src: &str) -> Self {
        let src = src.as_bytes();
        if src.len() != 36 || !hex::has_hyphens_at(src, 0) {
            panic!("invalid UUID string representation");
        }
        match hex::decode_hyphenated(src, 0) {
            Some(bytes) => Self(bytes),
            None => panic!("invalid UUID string representation"),
        }
    }

    /// Creates a UUID from a slice of exactly 16 bytes, copied verbatim.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfcuuid::Uuid;
    ///
    /// let x = Uuid::from_slice(&[0xffu8; 16])?;
    /// assert_eq!(x, Uuid::MAX);
    /// assert_eq!(Uuid::from_slice(&[1, 2, 3]).unwrap_err().actual(), 3);
    /// # Ok::<(), rfcuuid::LengthError>(())
    /// ```
    pub fn from_slice(src: &[u8]) -> Result<Self, LengthError> {
        <[u8; 16]>::try_from(src)
            .map(Self)
            .map_err(|_| LengthError::new(src.len()))
    }

    fn parse_ascii(src: &[u8]) -> Result<Self, ParseErrorKind> {
        if src.len() != 36 {
            return Err(ParseErrorKind::InvalidLength);
        }
        if !hex::has_hyphens_at(src, 0) {
            return Err(ParseErrorKind::InvalidHyphens);
        }
        hex::decode_hyphenated(src, 0)
            .map(Self)
            .ok_or(ParseErrorKind::InvalidHex)
    }

    fn parse_body(src: &[u8], offset: usize) -> Result<Self, ParseErrorKind> {
        if !hex::has_hyphens_at(src, offset) {
            return Err(ParseErrorKind::InvalidHyphensInBody);
        }
        hex::decode_hyphenated(src, offset)
            .map(Self)
            .ok_or(ParseErrorKind::InvalidHex)
    }
}

impl str::FromStr for Uuid {
    type Err = ParseError;

    /// Creates an object from the 8-4-4-4-12 hexadecimal string representation.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        Self::parse(src)
    }
}
