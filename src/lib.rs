//! An implementation of RFC 9562 UUIDs: versions 3, 4, 5, 7, and 8
//!
//! ```rust
//! use rfcuuid::{uuid4, uuid5, uuid7, Uuid};
//!
//! let uuid = uuid7();
//! println!("{}", uuid); // e.g. "01809424-3e59-7c05-9219-566f82fff672"
//! println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
//!
//! let random = uuid4();
//! assert_eq!(random.version(), rfcuuid::Version::Random);
//!
//! let named = uuid5(Uuid::NAMESPACE_DNS, "www.example.com");
//! assert_eq!(named.to_string(), "2ed6657d-e927-568b-95e1-2665a8aea6a2");
//! ```
//!
//! See [RFC 9562](https://www.rfc-editor.org/rfc/rfc9562).
//!
//! # Field and bit layout of UUIDv7
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          unix_ts_ms                           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |          unix_ts_ms           |  ver  |        rand_a         |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|                        rand_b                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                            rand_b                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - The 48-bit `unix_ts_ms` field holds the Unix timestamp in milliseconds.
//! - The 4-bit `ver` field is set at `0111`.
//! - The 12-bit `rand_a` field holds the sub-millisecond fraction of the clock reading, scaled to
//!   4096 steps per millisecond.
//! - The 2-bit `var` field is set at `10`.
//! - The 62-bit `rand_b` field is filled with a cryptographically strong random number.
//!
//! `unix_ts_ms` and `rand_a` together form a 60-bit sequence that a [`V7Generator`] keeps strictly
//! increasing. When the clock has not advanced past the last sequence issued, for example because
//! several calls land in the same 1/4096 ms step or the clock moved backwards, the generator
//! issues the last sequence plus one instead; the embedded timestamp may therefore run slightly
//! ahead of the real-time clock.
//!
//! # Parsing
//!
//! [`Uuid::parse`] (and [`FromStr`](std::str::FromStr)) accepts the 36-character hyphenated form
//! only, in either letter case. [`Uuid::parse_lenient`] additionally accepts the
//! `urn:uuid:`-prefixed, braced, and 32-digit compact forms.
//!
//! # Crate features
//!
//! Default features:
//!
//! - `global_gen`: enables the process-wide default generator behind [`uuid7()`].
//!
//! Optional features:
//!
//! - `serde`: enables serialization and deserialization of [`Uuid`] through serde.
//! - `uuid`: enables conversion from and into [`uuid::Uuid`](https://docs.rs/uuid).

#![cfg_attr(docsrs, feature(doc_cfg))]

mod hex;
mod random;

mod id;
pub use id::{Uuid, Variant, Version};

mod encoding;
mod parse;

pub mod error;
pub use error::{LengthError, ParseError, ParseErrorKind, ScanError};

mod name;
pub use name::{uuid3, uuid5};

mod v4;
pub use v4::{uuid4, uuid4_batch};

mod v8;
pub use v8::uuid8;

pub mod generator;
pub use generator::V7Generator;

mod global_gen;
#[cfg(feature = "global_gen")]
pub use global_gen::{default_generator, uuid7, uuid7_batch};

mod pool;
pub use pool::{Pool, POOL_SIZE};

mod sql;
pub use sql::SqlValue;
