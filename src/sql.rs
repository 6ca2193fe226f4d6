//! Adapter for database drivers and other sources of loosely typed values.
//!
//! [`SqlValue`] models the handful of shapes a driver hands back for a column. A UUID is stored as
//! its 36-character text form; when reading, raw 16-byte blobs are accepted alongside every
//! textual form [`Uuid::parse_lenient`] understands.

use std::borrow::Cow;
use std::time::SystemTime;

use crate::error::ScanError;
use crate::Uuid;

/// A loosely typed value exchanged with a storage driver.
#[derive(Clone, PartialEq, Debug)]
pub enum SqlValue<'a> {
    Null,
    Integer(i64),
    Real(f64),
    Boolean(bool),
    Text(Cow<'a, str>),
    Blob(Cow<'a, [u8]>),
    Timestamp(SystemTime),
}

impl SqlValue<'_> {
    /// Returns the name of the kind of this value, as reported in [`ScanError::TypeMismatch`].
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Integer(_) => "integer",
            Self::Real(_) => "real",
            Self::Boolean(_) => "boolean",
            Self::Text(_) => "text",
            Self::Blob(_) => "blob",
            Self::Timestamp(_) => "timestamp",
        }
    }
}

impl Uuid {
    /// Reads a UUID from a driver value.
    ///
    /// A blob of exactly 16 bytes is taken as the raw binary form. Any other text or blob goes
    /// through [`Uuid::parse_lenient`]. NULL and non-textual kinds are rejected; use
    /// [`Uuid::scan_nullable`] for nullable columns.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfcuuid::{SqlValue, Uuid};
    ///
    /// let x = Uuid::scan(&SqlValue::Text("{6ba7b810-9dad-11d1-80b4-00c04fd430c8}".into()))?;
    /// assert_eq!(x, Uuid::NAMESPACE_DNS);
    ///
    /// let y = Uuid::scan(&SqlValue::Blob(x.to_bytes().to_vec().into()))?;
    /// assert_eq!(y, x);
    /// # Ok::<(), rfcuuid::ScanError>(())
    /// ```
    pub fn scan(src: &SqlValue<'_>) -> Result<Self, ScanError> {
        match src {
            SqlValue::Blob(bytes) if bytes.len() == 16 => {
                let mut raw = [0u8; 16];
                raw.copy_from_slice(bytes);
                Ok(Self::from_bytes(raw))
            }
            SqlValue::Blob(bytes) => Ok(Self::parse_lenient_ascii(bytes)?),
            SqlValue::Text(text) => Ok(Self::parse_lenient(text)?),
            other => Err(ScanError::TypeMismatch {
                found: other.kind_name(),
            }),
        }
    }

    /// Reads an optional UUID, mapping NULL to `None`.
    pub fn scan_nullable(src: &SqlValue<'_>) -> Result<Option<Self>, ScanError> {
        match src {
            SqlValue::Null => Ok(None),
            other => Self::scan(other).map(Some),
        }
    }

    /// Returns the value to store for this UUID: its 36-character text form.
    pub fn to_sql_value(&self) -> SqlValue<'static> {
        SqlValue::Text(Cow::Owned(self.to_string()))
    }
}

impl From<Uuid> for SqlValue<'static> {
    fn from(src: Uuid) -> Self {
        src.to_sql_value()
    }
}

impl From<Option<Uuid>> for SqlValue<'static> {
    fn from(src: Option<Uuid>) -> Self {
        src.map_or(SqlValue::Null, |e| e.to_sql_value())
    }
}

impl TryFrom<SqlValue<'_>> for Uuid {
    type Error = ScanError;

    fn try_from(src: SqlValue<'_>) -> Result<Self, Self::Error> {
        Self::scan(&src)
    }
}
