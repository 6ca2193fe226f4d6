//! UUIDv7 generator and related types.

use std::sync::{Mutex, PoisonError};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::{random, Uuid};

const MAX_UNIX_TS_MS: u64 = (1 << 48) - 1;
const NANOS_PER_MILLI: u32 = 1_000_000;

/// Represents a UUIDv7 generator that encapsulates a 60-bit sequence and guarantees the
/// monotonic order of UUIDs generated by the same instance.
///
/// The sequence concatenates the 48-bit Unix timestamp in milliseconds with a 12-bit
/// sub-millisecond fraction of the clock reading (RFC 9562, Section 6.2, Method 3). When a new
/// reading does not exceed the previously issued sequence (several calls within the same
/// ~244-nanosecond slot, or a clock rollback), the generator issues the previous sequence plus
/// one instead; a fraction overflow carries into the millisecond, so the embedded timestamp may
/// run ahead of the real-time clock. The remaining 62 bits are filled with random data.
///
/// The state sits behind a mutex, so a generator can be shared between threads. Ordering is
/// guaranteed only among UUIDs from the same instance; separate instances are independent.
///
/// # Examples
///
/// ```rust
/// use std::thread;
/// use rfcuuid::V7Generator;
///
/// let g = V7Generator::new();
/// thread::scope(|s| {
///     for i in 0..4 {
///         let g = &g;
///         s.spawn(move || {
///             for _ in 0..8 {
///                 println!("{} by thread {}", g.generate(), i);
///                 thread::yield_now();
///             }
///         });
///     }
/// });
/// ```
///
/// # Generator functions
///
/// | Method                  | Timestamp | Count |
/// | ----------------------- | --------- | ----- |
/// | [`generate`]            | Now       | 1     |
/// | [`generate_core`]       | Argument  | 1     |
/// | [`generate_batch`]      | Now       | `n`   |
/// | [`generate_batch_core`] | Argument  | `n`   |
///
/// The `core` functions take the clock reading as the duration since the Unix epoch, which is
/// useful for testing or for plugging in another clock.
///
/// [`generate`]: V7Generator::generate
/// [`generate_core`]: V7Generator::generate_core
/// [`generate_batch`]: V7Generator::generate_batch
/// [`generate_batch_core`]: V7Generator::generate_batch_core
#[derive(Debug, Default)]
pub struct V7Generator {
    last_sequence: Mutex<u64>,
}

impl V7Generator {
    /// Creates a generator instance.
    pub const fn new() -> Self {
        Self {
            last_sequence: Mutex::new(0),
        }
    }

    /// Generates a new UUIDv7 object from the current timestamp.
    pub fn generate(&self) -> Uuid {
        self.generate_core(now())
    }

    /// Generates a new UUIDv7 object from the clock reading passed.
    pub fn generate_core(&self, since_epoch: Duration) -> Uuid {
        let mut rand_b = [0u8; 8];
        random::fill(&mut rand_b);
        let sequence = self.reserve(sequence_of(since_epoch), 1);
        compose(sequence, rand_b)
    }

    /// Generates `n` UUIDv7 objects from a single clock reading and a single read from the random
    /// number generator.
    ///
    /// The result is in ascending order and interchangeable with `n` calls of
    /// [`generate()`](V7Generator::generate).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfcuuid::V7Generator;
    ///
    /// let g = V7Generator::new();
    /// let batch = g.generate_batch(1_000);
    /// assert!(batch.windows(2).all(|w| w[0] < w[1]));
    /// assert!(batch[999] < g.generate());
    /// ```
    pub fn generate_batch(&self, n: usize) -> Vec<Uuid> {
        self.generate_batch_core(now(), n)
    }

    /// Generates `n` UUIDv7 objects from the clock reading passed.
    pub fn generate_batch_core(&self, since_epoch: Duration, n: usize) -> Vec<Uuid> {
        if n == 0 {
            return Vec::new();
        }

        let mut raw = vec![0u8; n * 8];
        random::fill(&mut raw);
        let first = self.reserve(sequence_of(since_epoch), n as u64);
        raw.chunks_exact(8)
            .zip(first..)
            .map(|(rand_b, sequence)| {
                let mut buffer = [0u8; 8];
                buffer.copy_from_slice(rand_b);
                compose(sequence, buffer)
            })
            .collect()
    }

    /// Returns an infinite iterator that produces a new UUIDv7 object for each call of `next()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfcuuid::V7Generator;
    ///
    /// V7Generator::new()
    ///     .iter()
    ///     .enumerate()
    ///     .skip(4)
    ///     .take(4)
    ///     .for_each(|(i, e)| println!("[{}] {}", i, e));
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = Uuid> + '_ {
        std::iter::repeat_with(move || self.generate())
    }

    /// Reserves `n` consecutive sequences and returns the first.
    fn reserve(&self, candidate: u64, n: u64) -> u64 {
        let mut last = self
            .last_sequence
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        advance(&mut last, candidate, n)
    }
}

/// Advances `last` by `n` sequences, starting at `candidate` or just above `last`, whichever is
/// greater, and returns the first sequence of the range.
pub(crate) fn advance(last: &mut u64, candidate: u64, n: u64) -> u64 {
    debug_assert!(n > 0);
    let first = if candidate > *last {
        candidate
    } else {
        if (candidate >> 12) + 1 < (*last >> 12) {
            tracing::debug!(
                clock_ms = candidate >> 12,
                last_ms = *last >> 12,
                "clock behind last issued UUIDv7; continuing from last sequence"
            );
        }
        *last + 1
    };
    *last = first + (n - 1);
    first
}

/// Reads the system clock as the duration since the Unix epoch; a reading before the epoch is
/// treated as the epoch itself.
pub(crate) fn now() -> Duration {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
}

/// Converts a clock reading to the 60-bit sequence of millisecond and 12-bit fraction.
pub(crate) fn sequence_of(since_epoch: Duration) -> u64 {
    let unix_ts_ms = (since_epoch.as_millis() as u64) & MAX_UNIX_TS_MS;
    let frac = (since_epoch.subsec_nanos() % NANOS_PER_MILLI) as u64 * 4096
        / NANOS_PER_MILLI as u64;
    unix_ts_ms << 12 | frac
}

/// Builds a UUIDv7 from a 60-bit sequence and eight random bytes.
pub(crate) fn compose(sequence: u64, rand_b: [u8; 8]) -> Uuid {
    Uuid::from_fields_v7(
        (sequence >> 12) & MAX_UNIX_TS_MS,
        (sequence & 0xfff) as u16,
        u64::from_be_bytes(rand_b) >> 2,
    )
}

#[cfg(test)]
mod tests {
    use super::{compose, sequence_of, V7Generator};
    use crate::{Variant, Version};
    use std::time::Duration;

    const TS: Duration = Duration::from_millis(0x0123_4567_89ab);

    /// Generates increasing UUIDs even with decreasing or constant timestamp
    #[test]
    fn generates_increasing_uuids_even_with_decreasing_or_constant_timestamp() {
        let g = V7Generator::new();
        let mut prev = g.generate_core(TS);
        assert_eq!(prev.unix_ts_ms(), 0x0123_4567_89ab);
        for i in 0..100_000u64 {
            let curr = g.generate_core(TS - Duration::from_millis(i.min(4_000)));
            assert!(prev < curr);
            prev = curr;
        }
        assert!(prev.unix_ts_ms() >= 0x0123_4567_89ab);
    }

    /// Carries sub-millisecond counter into timestamp under frozen clock
    #[test]
    fn carries_sub_millisecond_counter_into_timestamp_under_frozen_clock() {
        let g = V7Generator::new();
        let samples: Vec<_> = (0..10_000).map(|_| g.generate_core(TS)).collect();
        for w in samples.windows(2) {
            assert!(w[0] < w[1]);
        }
        assert_eq!(samples[0].as_bytes()[6..8], [0x70, 0x00]);
        assert_eq!(samples[4095].as_bytes()[6..8], [0x7f, 0xff]);
        assert_eq!(samples[4095].unix_ts_ms(), 0x0123_4567_89ab);
        assert_eq!(samples[4096].unix_ts_ms(), 0x0123_4567_89ac);
        assert_eq!(samples[4096].as_bytes()[6..8], [0x70, 0x00]);
        assert_eq!(samples[9_999].unix_ts_ms(), 0x0123_4567_89ad);
        for e in &samples {
            assert_eq!(e.version(), Version::SortRand);
            assert_eq!(e.variant(), Variant::Rfc9562);
        }
    }

    /// Encodes sub-millisecond fraction in 12 bits
    #[test]
    fn encodes_sub_millisecond_fraction_in_12_bits() {
        let cases = [
            (0, 0x000),
            (244, 0x000),
            (245, 0x001),
            (500_000, 0x800),
            (999_999, 0xfff),
        ];
        for (nanos, frac) in cases {
            let reading = TS + Duration::from_nanos(nanos);
            assert_eq!(sequence_of(reading), 0x0123_4567_89ab << 12 | frac);
            let e = V7Generator::new().generate_core(reading);
            assert_eq!(e.unix_ts_ms(), 0x0123_4567_89ab);
            assert_eq!(
                u16::from_be_bytes([e.as_bytes()[6], e.as_bytes()[7]]),
                0x7000 | frac as u16
            );
        }
    }

    /// Places random bits after variant
    #[test]
    fn places_random_bits_after_variant() {
        let e = compose(0x0123_4567_89ab_fff, [0xff; 8]);
        assert_eq!(e.to_string(), "01234567-89ab-7fff-bfff-ffffffffffff");
        let e = compose(0, [0x00; 8]);
        assert_eq!(e.to_string(), "00000000-0000-7000-8000-000000000000");
    }

    /// Generates ascending batches continuing the sequence
    #[test]
    fn generates_ascending_batches_continuing_the_sequence() {
        let g = V7Generator::new();
        let first = g.generate_core(TS);
        let batch = g.generate_batch_core(TS, 5_000);
        let last = g.generate_core(TS);
        assert_eq!(batch.len(), 5_000);
        assert!(first < batch[0]);
        for w in batch.windows(2) {
            assert!(w[0] < w[1]);
        }
        assert!(batch[4_999] < last);
        // 1 + 5_000 + 1 sequences issued from the frozen reading
        assert_eq!(last.unix_ts_ms(), 0x0123_4567_89ab + 5_001 / 4096);
        assert_eq!(
            u16::from_be_bytes([last.as_bytes()[6], last.as_bytes()[7]]) & 0xfff,
            (5_001 % 4096) as u16
        );
    }

    /// Leaves state untouched by empty batch
    #[test]
    fn leaves_state_untouched_by_empty_batch() {
        let g = V7Generator::new();
        assert!(g.generate_batch_core(TS, 0).is_empty());
        assert!(g.generate_batch(0).is_empty());
        let e = g.generate_core(TS);
        assert_eq!(e.as_bytes()[6..8], [0x70, 0x00]);
    }

    /// Keeps order across interleaved single and batch calls
    #[test]
    fn keeps_order_across_interleaved_single_and_batch_calls() {
        let g = V7Generator::new();
        let mut all = Vec::new();
        for i in 0..50 {
            all.push(g.generate());
            all.extend(g.generate_batch(i));
            all.push(g.generate_core(TS));
        }
        for w in all.windows(2) {
            assert!(w[0] < w[1]);
        }
    }

    /// Isolates state per instance
    #[test]
    fn isolates_state_per_instance() {
        let g1 = V7Generator::new();
        let g2 = V7Generator::new();
        let a = g1.generate_core(TS);
        let b = g2.generate_core(TS);
        // Both start from the same sequence; only the random bits differ.
        assert_eq!(a.as_bytes()[..8], b.as_bytes()[..8]);
        assert_ne!(a, b);
    }

    /// Generates no IDs sharing same timestamp and counters under multithreading
    #[test]
    fn generates_no_ids_sharing_same_timestamp_and_counters_under_multithreading() {
        use std::{collections::HashSet, thread};

        let g = V7Generator::new();
        let per_thread: Vec<Vec<_>> = thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| (0..10_000).map(|_| g.generate()).collect::<Vec<_>>()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let mut s = HashSet::new();
        for samples in &per_thread {
            for w in samples.windows(2) {
                assert!(w[0] < w[1]);
            }
            for e in samples {
                s.insert(<[u8; 8]>::try_from(&e.as_bytes()[..8]).unwrap());
            }
        }
        assert_eq!(s.len(), 4 * 10_000);
    }

    /// Encodes up-to-date timestamp
    #[test]
    fn encodes_up_to_date_timestamp() {
        use std::time;
        let g = V7Generator::new();
        for _ in 0..10_000 {
            let ts_now = (time::SystemTime::now()
                .duration_since(time::UNIX_EPOCH)
                .expect("clock may have gone backwards")
                .as_millis()) as i64;
            let timestamp = g.generate().unix_ts_ms() as i64;
            assert!((ts_now - timestamp).abs() < 16);
        }
    }

    /// Iterates over fresh ascending UUIDs
    #[test]
    fn iterates_over_fresh_ascending_uuids() {
        let g = V7Generator::new();
        let samples: Vec<_> = g.iter().take(1_000).collect();
        for w in samples.windows(2) {
            assert!(w[0] < w[1]);
        }
    }
}
