//! Hex encoding and display helpers for mock hashes and wallet addresses.

#[cfg(test)]
#[path = "hex_test.rs"]
mod hex_test;

use std::fmt::Write;

use rand::Rng;

/// Lowercase hex without prefix.
#[must_use]
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        // Writing into a String cannot fail.
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// `0x`-prefixed hex string of `N` random bytes.
pub fn random_prefixed_hex<const N: usize, R: Rng>(rng: &mut R) -> String {
    let mut bytes = [0u8; N];
    rng.fill(&mut bytes[..]);
    format!("0x{}", bytes_to_hex(&bytes))
}

/// `0x7c29fb...6c55` style abbreviation: first `head` and last `tail` chars.
///
/// Strings too short to abbreviate are returned unchanged.
#[must_use]
pub fn shorten(value: &str, head: usize, tail: usize) -> String {
    let chars = value.chars().collect::<Vec<_>>();
    if chars.len() <= head + tail {
        return value.to_owned();
    }
    let start = chars[..head].iter().collect::<String>();
    let end = chars[chars.len() - tail..].iter().collect::<String>();
    format!("{start}...{end}")
}

/// Whether `value` is `0x` followed by exactly `hex_len` lowercase hex digits.
#[must_use]
pub fn is_prefixed_hex(value: &str, hex_len: usize) -> bool {
    value
        .strip_prefix("0x")
        .is_some_and(|rest| rest.len() == hex_len && rest.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')))
}
