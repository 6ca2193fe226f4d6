//! Default generator and entry point functions.

#![cfg(feature = "global_gen")]
#![cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]

use std::sync;

use crate::{Uuid, V7Generator};

/// Returns the process-wide default generator, creating one if none exists.
///
/// Use a dedicated [`V7Generator`] instead when a stream of UUIDs needs ordering guarantees
/// isolated from the rest of the process.
pub fn default_generator() -> &'static V7Generator {
    static G: sync::OnceLock<V7Generator> = sync::OnceLock::new();
    G.get_or_init(V7Generator::new)
}

/// Generates a UUIDv7 object.
///
/// This function employs the process-wide default generator and guarantees the process-wide
/// (cross-thread) monotonic order of UUIDs generated through it.
///
/// # Examples
///
/// ```rust
/// let uuid = rfcuuid::uuid7();
/// println!("{}", uuid); // e.g., "01809424-3e59-7c05-9219-566f82fff672"
/// println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
///
/// let uuid_string: String = rfcuuid::uuid7().to_string();
/// ```
pub fn uuid7() -> Uuid {
    default_generator().generate()
}

/// Generates `n` UUIDv7 objects from the process-wide default generator.
///
/// See [`V7Generator::generate_batch()`].
pub fn uuid7_batch(n: usize) -> Vec<Uuid> {
    default_generator().generate_batch(n)
}
