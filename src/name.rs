//! Name-based UUIDv3 and UUIDv5.

use std::sync::OnceLock;

use md5::Md5;
use sha1::{Digest, Sha1};

use crate::Uuid;

/// The name spaces whose digest states are computed once and cloned per call.
const WELL_KNOWN: [Uuid; 4] = [
    Uuid::NAMESPACE_DNS,
    Uuid::NAMESPACE_URL,
    Uuid::NAMESPACE_OID,
    Uuid::NAMESPACE_X500,
];

/// Generates a UUIDv3 object from a name space and a name, using MD5.
///
/// The same inputs always produce the same UUID. Prefer [`uuid5()`] unless compatibility with
/// existing version 3 identifiers is required.
///
/// # Examples
///
/// ```rust
/// use rfcuuid::{uuid3, Uuid};
///
/// let x = uuid3(Uuid::NAMESPACE_DNS, "www.example.com");
/// assert_eq!(x.to_string(), "5df41881-3aed-3515-88a7-2f4a814cf09e");
/// ```
pub fn uuid3(namespace: Uuid, name: impl AsRef<[u8]>) -> Uuid {
    static SEEDED: OnceLock<[Md5; 4]> = OnceLock::new();
    hash(seeded(&SEEDED), namespace, name.as_ref(), 3)
}

/// Generates a UUIDv5 object from a name space and a name, using SHA-1.
///
/// The same inputs always produce the same UUID.
///
/// # Examples
///
/// ```rust
/// use rfcuuid::{uuid5, Uuid};
///
/// let x = uuid5(Uuid::NAMESPACE_DNS, "www.example.com");
/// assert_eq!(x.to_string(), "2ed6657d-e927-568b-95e1-2665a8aea6a2");
/// ```
pub fn uuid5(namespace: Uuid, name: impl AsRef<[u8]>) -> Uuid {
    static SEEDED: OnceLock<[Sha1; 4]> = OnceLock::new();
    hash(seeded(&SEEDED), namespace, name.as_ref(), 5)
}

/// Returns the digest states that have absorbed each well-known name space.
fn seeded<D: Digest + Clone + Send + Sync>(cache: &'static OnceLock<[D; 4]>) -> &'static [D; 4] {
    cache.get_or_init(|| WELL_KNOWN.map(|ns| D::new_with_prefix(ns.as_bytes())))
}

fn hash<D: Digest + Clone>(seeded: &[D; 4], namespace: Uuid, name: &[u8], version: u8) -> Uuid {
    let mut hasher = match WELL_KNOWN.iter().position(|ns| *ns == namespace) {
        Some(i) => seeded[i].clone(),
        None => D::new_with_prefix(namespace.as_bytes()),
    };
    hasher.update(name);
    let digest = hasher.finalize();

    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&digest[..16]);
    Uuid::stamp(bytes, version)
}
