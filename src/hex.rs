//! Fixed-layout hexadecimal codec for the 8-4-4-4-12 representation.

const DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Marks a byte that is not a hexadecimal digit. Every valid entry is below `0x10`, so OR-ing
/// looked-up values and testing the top bit detects any invalid digit in one go.
const INVALID: u8 = 0xff;

const DECODE: [u8; 256] = {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < 10 {
        table[b'0' as usize + i] = i as u8;
        i += 1;
    }
    let mut i = 0;
    while i < 6 {
        table[b'a' as usize + i] = 10 + i as u8;
        table[b'A' as usize + i] = 10 + i as u8;
        i += 1;
    }
    table
};

/// Offsets of the high digit of each byte within the hyphenated form.
const HYPHENATED: [usize; 16] = [0, 2, 4, 6, 9, 11, 14, 16, 19, 21, 24, 26, 28, 30, 32, 34];

/// Offsets of the high digit of each byte within the compact form.
const COMPACT: [usize; 16] = [0, 2, 4, 6, 8, 10, 12, 14, 16, 18, 20, 22, 24, 26, 28, 30];

/// Offsets of the hyphens within the hyphenated form.
const HYPHENS: [usize; 4] = [8, 13, 18, 23];

/// Writes the 36-byte lowercase hyphenated representation of `src`.
pub(crate) const fn encode(src: &[u8; 16]) -> [u8; 36] {
    let mut buffer = [b'-'; 36];
    let mut i = 0;
    while i < 16 {
        let e = src[i] as usize;
        buffer[HYPHENATED[i]] = DIGITS[e >> 4];
        buffer[HYPHENATED[i] + 1] = DIGITS[e & 15];
        i += 1;
    }
    buffer
}

/// Returns `true` if `src[offset..]` carries hyphens at the positions of the 8-4-4-4-12 form.
///
/// The caller guarantees `src.len() >= offset + 36`.
pub(crate) const fn has_hyphens_at(src: &[u8], offset: usize) -> bool {
    src[offset + HYPHENS[0]] == b'-'
        && src[offset + HYPHENS[1]] == b'-'
        && src[offset + HYPHENS[2]] == b'-'
        && src[offset + HYPHENS[3]] == b'-'
}

/// Decodes the 32 digits of an 8-4-4-4-12 body starting at `offset`, skipping the hyphen
/// positions without inspecting them.
///
/// The caller guarantees `src.len() >= offset + 36`.
pub(crate) const fn decode_hyphenated(src: &[u8], offset: usize) -> Option<[u8; 16]> {
    decode_pairs(src, offset, &HYPHENATED)
}

/// Decodes 32 contiguous digits starting at `offset`.
///
/// The caller guarantees `src.len() >= offset + 32`.
pub(crate) const fn decode_compact(src: &[u8], offset: usize) -> Option<[u8; 16]> {
    decode_pairs(src, offset, &COMPACT)
}

const fn decode_pairs(src: &[u8], offset: usize, positions: &[usize; 16]) -> Option<[u8; 16]> {
    let mut dst = [0u8; 16];
    let mut acc = 0u8;
    let mut i = 0;
    while i < 16 {
        let hi = DECODE[src[offset + positions[i]] as usize];
        let lo = DECODE[src[offset + positions[i] + 1] as usize];
        acc |= hi | lo;
        dst[i] = (hi << 4) | (lo & 0x0f);
        i += 1;
    }
    if acc & 0x80 == 0 {
        Some(dst)
    } else {
        None
    }
}
