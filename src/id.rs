use std::{fmt, time};

/// Represents a Universally Unique IDentifier.
///
/// The value is a plain 16-byte array, so equality and the derived ordering are byte-wise: UUIDs
/// sort lexicographically by their binary (and canonical textual) representation, which puts
/// UUIDv7 values in chronological order.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Uuid(pub(crate) [u8; 16]);

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self([0xff; 16]);

    /// Name space ID for fully-qualified domain names (6ba7b810-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_DNS: Self = Self([
        0x6b, 0xa7, 0xb8, 0x10, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);

    /// Name space ID for URLs (6ba7b811-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_URL: Self = Self([
        0x6b, 0xa7, 0xb8, 0x11, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);

    /// Name space ID for ISO OIDs (6ba7b812-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_OID: Self = Self([
        0x6b, 0xa7, 0xb8, 0x12, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);

    /// Name space ID for X.500 DNs (6ba7b814-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_X500: Self = Self([
        0x6b, 0xa7, 0xb8, 0x14, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);

    /// Creates a UUID from a 16-byte big-endian array, without touching the version or variant
    /// bits.
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Returns a copy of the underlying byte array.
    pub const fn to_bytes(self) -> [u8; 16] {
        self.0
    }

    /// Returns `true` if this is the Nil UUID.
    pub const fn is_nil(&self) -> bool {
        u128::from_be_bytes(self.0) == 0
    }

    /// Returns the version field (bits 48 through 51).
    ///
    /// Any nibble is reported as is; values this crate never produces come back as
    /// [`Version::Other`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfcuuid::{Uuid, Version};
    ///
    /// let x = Uuid::must_parse("6ba7b810-9dad-11d1-80b4-00c04fd430c8");
    /// assert_eq!(x.version(), Version::Other(1));
    /// assert_eq!(x.version().as_u8(), 1);
    /// ```
    pub const fn version(&self) -> Version {
        Version::from_u8(self.0[6] >> 4)
    }

    /// Returns the variant field.
    pub const fn variant(&self) -> Variant {
        let b = self.0[8];
        if b & 0x80 == 0x00 {
            Variant::Ncs
        } else if b & 0xc0 == 0x80 {
            Variant::Rfc9562
        } else if b & 0xe0 == 0xc0 {
            Variant::Microsoft
        } else {
            Variant::Future
        }
    }

    /// Returns the 48-bit `unix_ts_ms` field, i.e., the leading six bytes as a big-endian
    /// integer.
    ///
    /// The value is only meaningful for UUIDv7; check [`Uuid::version()`] first.
    pub const fn unix_ts_ms(&self) -> u64 {
        let b = &self.0;
        (b[0] as u64) << 40
            | (b[1] as u64) << 32
            | (b[2] as u64) << 24
            | (b[3] as u64) << 16
            | (b[4] as u64) << 8
            | b[5] as u64
    }

    /// Returns the embedded timestamp of a UUIDv7 as a [`SystemTime`](time::SystemTime).
    ///
    /// Calling this on other versions is well defined but yields a meaningless time.
    pub fn timestamp(&self) -> time::SystemTime {
        time::UNIX_EPOCH + time::Duration::from_millis(self.unix_ts_ms())
    }

    /// Creates a UUID byte array from UUIDv7 field values.
    ///
    /// # Panics
    ///
    /// Panics if any argument is out of its field range.
    pub const fn from_fields_v7(unix_ts_ms: u64, rand_a: u16, rand_b: u64) -> Self {
        if unix_ts_ms >= 1 << 48 || rand_a >= 1 << 12 || rand_b >= 1 << 62 {
            panic!("invalid field value");
        }

        Self([
            (unix_ts_ms >> 40) as u8,
            (unix_ts_ms >> 32) as u8,
            (unix_ts_ms >> 24) as u8,
            (unix_ts_ms >> 16) as u8,
            (unix_ts_ms >> 8) as u8,
            unix_ts_ms as u8,
            0x70 | (rand_a >> 8) as u8,
            rand_a as u8,
            0x80 | (rand_b >> 56) as u8,
            (rand_b >> 48) as u8,
            (rand_b >> 40) as u8,
            (rand_b >> 32) as u8,
            (rand_b >> 24) as u8,
            (rand_b >> 16) as u8,
            (rand_b >> 8) as u8,
            rand_b as u8,
        ])
    }

    /// Overwrites the version nibble and the variant bits, keeping the other 122 bits.
    pub(crate) const fn stamp(mut bytes: [u8; 16], version: u8) -> Self {
        bytes[6] = (version << 4) | (bytes[6] & 0x0f);
        bytes[8] = 0x80 | (bytes[8] & 0x3f);
        Self(bytes)
    }
}

/// The version field of a UUID.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Version {
    /// `0`, only carried by the Nil UUID.
    Nil,
    /// `3`, name-based with MD5.
    Md5,
    /// `4`, random.
    Random,
    /// `5`, name-based with SHA-1.
    Sha1,
    /// `7`, Unix Epoch time-based.
    SortRand,
    /// `8`, custom or experimental.
    Custom,
    /// `15`, only carried by the Max UUID.
    Max,
    /// Any other nibble, e.g. a legacy version 1 found in external input.
    Other(u8),
}

impl Version {
    /// Converts a 4-bit version nibble; bits above the low nibble are ignored.
    pub const fn from_u8(src: u8) -> Self {
        match src & 0x0f {
            0 => Self::Nil,
            3 => Self::Md5,
            4 => Self::Random,
            5 => Self::Sha1,
            7 => Self::SortRand,
            8 => Self::Custom,
            15 => Self::Max,
            n => Self::Other(n),
        }
    }

    /// Returns the raw 4-bit version number.
    pub const fn as_u8(self) -> u8 {
        match self {
            Self::Nil => 0,
            Self::Md5 => 3,
            Self::Random => 4,
            Self::Sha1 => 5,
            Self::SortRand => 7,
            Self::Custom => 8,
            Self::Max => 15,
            Self::Other(n) => n,
        }
    }
}

impl From<Version> for u8 {
    fn from(src: Version) -> Self {
        src.as_u8()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => f.write_str("NIL"),
            Self::Max => f.write_str("MAX"),
            Self::Other(n) => write!(f, "unknown({})", n),
            known => write!(f, "V{}", known.as_u8()),
        }
    }
}

/// The variant field of a UUID.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Variant {
    /// `0xx`, reserved for NCS backward compatibility.
    Ncs,
    /// `10x`, the layout specified by RFC 9562 (formerly RFC 4122).
    Rfc9562,
    /// `110`, reserved for Microsoft backward compatibility.
    Microsoft,
    /// `111`, reserved for future definition.
    Future,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ncs => "NCS",
            Self::Rfc9562 => "RFC9562",
            Self::Microsoft => "Microsoft",
            Self::Future => "Future",
        })
    }
}
