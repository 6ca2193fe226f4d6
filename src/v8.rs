//! UUIDv8-related functionality

use crate::Uuid;

/// Creates a UUIDv8 object from caller-supplied data.
///
/// Only the version and variant bits are overwritten; the other 122 bits are taken from `data`
/// as is. Uniqueness is entirely up to the caller.
///
/// # Examples
///
/// ```rust
/// use rfcuuid::{uuid8, Variant, Version};
///
/// let x = uuid8([0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15]);
/// assert_eq!(x.to_string(), "00010203-0405-8607-8809-0a0b0c0d0e0f");
/// assert_eq!(x.version(), Version::Custom);
/// assert_eq!(x.variant(), Variant::Rfc9562);
/// ```
pub const fn uuid8(data: [u8; 16]) -> Uuid {
    Uuid::stamp(data, 8)
}
