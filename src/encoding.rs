//! Textual and binary representations and conversions.

use std::fmt;

use fstr::FStr;

use crate::error::{LengthError, ParseError};
use crate::{hex, Uuid};

impl Uuid {
    /// Returns the 8-4-4-4-12 hexadecimal string representation stored in a stack-allocated
    /// structure that can be dereferenced as `str` and [`Display`](fmt::Display)ed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfcuuid::Uuid;
    ///
    /// let x = "01809424-3e59-7c05-9219-566f82fff672".parse::<Uuid>()?;
    /// let y = x.encode();
    /// assert_eq!(&y as &str, "01809424-3e59-7c05-9219-566f82fff672");
    /// assert_eq!(format!("{}", y), "01809424-3e59-7c05-9219-566f82fff672");
    /// # Ok::<(), rfcuuid::ParseError>(())
    /// ```
    pub fn encode(&self) -> FStr<36> {
        let buffer = hex::encode(&self.0);
        debug_assert!(buffer.is_ascii());
        // SAFETY: the encoder writes ASCII hex digits and hyphens only
        unsafe { FStr::from_inner_unchecked(buffer) }
    }

    /// Appends the 36-byte 8-4-4-4-12 representation to `buf`, growing it only if its spare
    /// capacity is insufficient.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfcuuid::Uuid;
    ///
    /// let mut buf = b"id=".to_vec();
    /// Uuid::NAMESPACE_DNS.append_text(&mut buf);
    /// assert_eq!(buf, b"id=6ba7b810-9dad-11d1-80b4-00c04fd430c8");
    /// ```
    pub fn append_text(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&hex::encode(&self.0));
    }

    /// Appends the raw 16 bytes to `buf`, growing it only if its spare capacity is insufficient.
    pub fn append_binary(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.0);
    }
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl From<Uuid> for Vec<u8> {
    fn from(src: Uuid) -> Self {
        src.0.to_vec()
    }
}

impl TryFrom<&[u8]> for Uuid {
    type Error = LengthError;

    fn try_from(src: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(src)
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        Self::from_be_bytes(src.0)
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self(src.to_be_bytes())
    }
}

impl From<Uuid> for String {
    fn from(src: Uuid) -> Self {
        src.to_string()
    }
}

impl TryFrom<&str> for Uuid {
    type Error = ParseError;

    fn try_from(src: &str) -> Result<Self, Self::Error> {
        Self::parse(src)
    }
}

impl TryFrom<String> for Uuid {
    type Error = ParseError;

    fn try_from(src: String) -> Result<Self, Self::Error> {
        Self::parse(&src)
    }
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Uuid;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Uuid {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Uuid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Uuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a UUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            Self::Value::parse(value).map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            Self::Value::from_slice(value).map_err(de::Error::custom)
        }
    }

}

#[cfg(test)]
mod tests {
    use crate::Uuid;

    /// Returns a collection of prepared cases
    fn prepare_cases() -> &'static [((u64, u16, u64), &'static str)] {
        const MAX_UINT48: u64 = (1 << 48) - 1;
        const MAX_UINT12: u16 = (1 << 12) - 1;
        const MAX_UINT62: u64 = (1 << 62) - 1;

        &[
            ((0, 0, 0), "00000000-0000-7000-8000-000000000000"),
            ((MAX_UINT48, 0, 0), "ffffffff-ffff-7000-8000-000000000000"),
            ((0, MAX_UINT12, 0), "00000000-0000-7fff-8000-000000000000"),
            ((0, 0, MAX_UINT62), "00000000-0000-7000-bfff-ffffffffffff"),
            (
                (MAX_UINT48, MAX_UINT12, MAX_UINT62),
                "ffffffff-ffff-7fff-bfff-ffffffffffff",
            ),
            (
                (0x17f22e279b0, 0xcc3, 0x18c4dc0c0c07398f),
                "017f22e2-79b0-7cc3-98c4-dc0c0c07398f",
            ),
        ]
    }

    /// Encodes and decodes prepared cases correctly
    #[test]
    fn encodes_and_decodes_prepared_cases_correctly() {
        for (fs, text) in prepare_cases() {
            let from_fields = Uuid::from_fields_v7(fs.0, fs.1, fs.2);
            assert_eq!(Ok(from_fields), text.parse());
            assert_eq!(Ok(from_fields), text.to_uppercase().parse());
            assert_eq!(&from_fields.encode() as &str, *text);
            assert_eq!(&from_fields.to_string(), text);
            assert_eq!(&from_fields.encode().to_string(), text);
            #[cfg(feature = "uuid")]
            assert_eq!(&uuid::Uuid::from(from_fields).to_string(), text);
        }
    }

    /// Returns Nil and Max UUIDs
    #[test]
    fn returns_nil_and_max_uuids() {
        assert_eq!(
            &Uuid::NIL.encode() as &str,
            "00000000-0000-0000-0000-000000000000"
        );

        assert_eq!(
            &Uuid::MAX.encode() as &str,
            "ffffffff-ffff-ffff-ffff-ffffffffffff"
        );
    }

    /// Has symmetric converters
    #[test]
    fn has_symmetric_converters() {
        for (fs, _) in prepare_cases() {
            let e = Uuid::from_fields_v7(fs.0, fs.1, fs.2);
            assert_eq!(Uuid::from(<[u8; 16]>::from(e)), e);
            assert_eq!(Uuid::from(u128::from(e)), e);
            assert_eq!(Uuid::try_from(Vec::<u8>::from(e).as_slice()), Ok(e));
            assert_eq!(e.encode().parse(), Ok(e));
            assert_eq!(e.encode().to_uppercase().parse(), Ok(e));
            assert_eq!(Uuid::try_from(e.to_string()), Ok(e));
            assert_eq!(Uuid::try_from(e.to_string().to_uppercase()), Ok(e));
            assert_eq!(Uuid::try_from(&*e.to_string()), Ok(e));
            #[cfg(feature = "uuid")]
            assert_eq!(Uuid::from(<uuid::Uuid>::from(e)), e);

            #[cfg(feature = "uuid")]
            assert_eq!(uuid::Uuid::from(e).as_bytes(), &<[u8; 16]>::from(e));
            #[cfg(feature = "uuid")]
            assert_eq!(uuid::Uuid::from(e).as_u128(), u128::from(e));
        }
    }

    /// Reports offending input from text conversion
    #[test]
    fn reports_offending_input_from_text_conversion() {
        let err = Uuid::try_from("urn:uuid:6ba7b810-9dad-11d1-80b4-00c04fd430c8").unwrap_err();
        assert_eq!(err.input(), "urn:uuid:6ba7b810-9dad-11d1-80b4-00c04fd430c8");
        let err = Uuid::try_from(&[0u8; 17][..]).unwrap_err();
        assert_eq!(err.actual(), 17);
    }

    /// Appends into existing buffers
    #[test]
    fn appends_into_existing_buffers() {
        let e = Uuid::NAMESPACE_DNS;

        let mut buf = Vec::with_capacity(64);
        buf.extend_from_slice(b"prefix:");
        let ptr = buf.as_ptr();
        e.append_text(&mut buf);
        assert_eq!(buf, b"prefix:6ba7b810-9dad-11d1-80b4-00c04fd430c8");
        assert_eq!(buf.as_ptr(), ptr, "pre-sized buffer must not reallocate");

        let mut buf = b"ab".to_vec();
        e.append_text(&mut buf);
        assert_eq!(buf, b"ab6ba7b810-9dad-11d1-80b4-00c04fd430c8");

        let mut buf = vec![0xee];
        e.append_binary(&mut buf);
        assert_eq!(buf[0], 0xee);
        assert_eq!(buf[1..], *e.as_bytes());
    }
}
