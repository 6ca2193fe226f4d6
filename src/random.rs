//! Access to the operating system's cryptographically secure random number generator.

use rand::{rngs::OsRng, RngCore};

/// Fills `dest` with unpredictable bytes from the system CSPRNG.
///
/// # Panics
///
/// Panics if the operating system cannot provide entropy. No UUID can be generated safely in
/// that environment, so the failure is not surfaced through the generation APIs.
pub(crate) fn fill(dest: &mut [u8]) {
    if let Err(err) = OsRng.try_fill_bytes(dest) {
        panic!("rfcuuid: system random number generator failed: {}", err);
    }
}
