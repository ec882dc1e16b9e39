// Copyright 2025 the Flameview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Source-location hashing.

/// Fold UTF-16 code units into a 31-multiplier rolling hash.
///
/// Every step wraps in signed 32-bit arithmetic.
pub fn rolling_hash(seed: i32, units: impl IntoIterator<Item = u16>) -> i32 {
    units.into_iter().fold(seed, |hash, unit| {
        hash.wrapping_mul(31).wrapping_add(i32::from(unit))
    })
}

/// Hash of a frame's source location (`file` followed by the decimal `line`).
///
/// A zero line means "no line" and contributes no digits, so a frame without
/// any location hashes to `0`.
pub fn source_hash(file: &str, line: u32) -> i32 {
    let hash = rolling_hash(0, file.encode_utf16());
    if line == 0 {
        return hash;
    }
    let mut digits = [0_u16; 10];
    let mut start = digits.len();
    let mut rest = line;
    while rest > 0 {
        start -= 1;
        #[allow(
            clippy::cast_possible_truncation,
            reason = "A single decimal digit always fits."
        )]
        let digit = (rest % 10) as u16;
        digits[start] = u16::from(b'0') + digit;
        rest /= 10;
    }
    rolling_hash(hash, digits[start..].iter().copied())
}
