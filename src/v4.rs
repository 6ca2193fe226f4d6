//! UUIDv4-related functionality

use crate::{random, Uuid};

/// Generates a UUIDv4 object.
///
/// # Examples
///
/// ```rust
/// let uuid = rfcuuid::uuid4();
/// println!("{}", uuid); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
/// println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
/// ```
pub fn uuid4() -> Uuid {
    let mut bytes = [0u8; 16];
    random::fill(&mut bytes);
    Uuid::stamp(bytes, 4)
}

/// Generates `n` UUIDv4 objects with a single read from the random number generator.
///
/// # Examples
///
/// ```rust
/// let uuids = rfcuuid::uuid4_batch(100);
/// assert_eq!(uuids.len(), 100);
/// ```
pub fn uuid4_batch(n: usize) -> Vec<Uuid> {
    let mut raw = vec![0u8; n * 16];
    random::fill(&mut raw);
    raw.chunks_exact(16)
        .map(|chunk| {
            let mut bytes = [0u8; 16];
            bytes.copy_from_slice(chunk);
            Uuid::stamp(bytes, 4)
        })
        .collect()
}
