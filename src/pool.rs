//! Buffered generators that amortize the cost of reading the random number generator.

use std::sync::{Mutex, PoisonError};

use crate::generator::{advance, compose, now, sequence_of};
use crate::{random, Uuid};

/// Number of entries fetched per refill of each buffer.
pub const POOL_SIZE: usize = 256;

/// A buffered generator of UUIDv4 and UUIDv7 objects.
///
/// Random bytes are read from the system in bulk, [`POOL_SIZE`] entries at a time, and handed out
/// one entry per call. UUIDv4 objects are fully prepared at refill time; for UUIDv7 only the 62
/// random bits are buffered, while the clock reading and the monotonic sequence are computed live
/// per call, exactly as [`V7Generator`](crate::V7Generator) does.
///
/// The UUIDv7 sequence belongs to the pool and is independent of any other generator. A pool can
/// be shared between threads.
///
/// # Examples
///
/// ```rust
/// use rfcuuid::Pool;
///
/// let pool = Pool::new();
/// let a = pool.generate_v7();
/// let b = pool.generate_v7();
/// assert!(a < b);
/// println!("{}", pool.generate_v4());
/// ```
#[derive(Debug)]
pub struct Pool {
    inner: Mutex<PoolInner>,
}

#[derive(Debug)]
struct PoolInner {
    v4_buf: Box<[Uuid; POOL_SIZE]>,
    v4_pos: usize,
    v7_rand: Box<[u8; POOL_SIZE * 8]>,
    v7_pos: usize,
    v7_last_sequence: u64,
}

impl Pool {
    /// Creates an empty pool; the first call of each kind triggers a refill.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(PoolInner {
                v4_buf: Box::new([Uuid::NIL; POOL_SIZE]),
                v4_pos: POOL_SIZE,
                v7_rand: Box::new([0; POOL_SIZE * 8]),
                v7_pos: POOL_SIZE,
                v7_last_sequence: 0,
            }),
        }
    }

    /// Generates a UUIDv4 object from the pool.
    pub fn generate_v4(&self) -> Uuid {
        let mut inner = self.lock();
        if inner.v4_pos >= POOL_SIZE {
            inner.refill_v4();
        }
        let e = inner.v4_buf[inner.v4_pos];
        inner.v4_pos += 1;
        e
    }

    /// Generates a UUIDv7 object from the pool, reading the current time.
    pub fn generate_v7(&self) -> Uuid {
        let mut inner = self.lock();
        if inner.v7_pos >= POOL_SIZE {
            inner.refill_v7();
        }
        let offset = inner.v7_pos * 8;
        let mut rand_b = [0u8; 8];
        rand_b.copy_from_slice(&inner.v7_rand[offset..offset + 8]);
        inner.v7_pos += 1;

        let sequence = advance(&mut inner.v7_last_sequence, sequence_of(now()), 1);
        drop(inner);

        compose(sequence, rand_b)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, PoolInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Pool {
    fn default() -> Self {
        Self::new()
    }
}

impl PoolInner {
    fn refill_v4(&mut self) {
        let mut raw = [0u8; POOL_SIZE * 16];
        random::fill(&mut raw);
        for (dst, src) in self.v4_buf.iter_mut().zip(raw.chunks_exact(16)) {
            let mut bytes = [0u8; 16];
            bytes.copy_from_slice(src);
            *dst = Uuid::stamp(bytes, 4);
        }
        self.v4_pos = 0;
        tracing::trace!(buffer = "v4", entries = POOL_SIZE, "refilled UUID pool");
    }

    fn refill_v7(&mut self) {
        random::fill(&mut self.v7_rand[..]);
        self.v7_pos = 0;
        tracing::trace!(buffer = "v7", entries = POOL_SIZE, "refilled UUID pool");
    }
}
