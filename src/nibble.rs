// Copyright (c) Kanari Network
// SPDX-License-Identifier: Apache-2.0

use crate::hash::digest;

/// A single hex digit, 0..16. Plain `u8` rather than a wrapper type: the
/// only operations this crate performs on nibbles are comparison,
/// indexing, and hex rendering, none of which benefit from a newtype.
pub type Nibble = u8;

/// Unpacks each byte into a high nibble followed by a low nibble.
pub fn bytes_to_nibbles(bytes: &[u8]) -> Vec<Nibble> {
    let mut out = Vec::with_capacity(bytes.len() * 2);
    for byte in bytes {
        out.push(byte >> 4);
        out.push(byte & 0x0f);
    }
    out
}

/// Packs nibbles two-per-byte, high half first. An odd-length path has
/// its trailing nibble in the high half of the final byte with the low
/// half zeroed.
pub fn nibbles_to_bytes(nibbles: &[Nibble]) -> Vec<u8> {
    let mut out = Vec::with_capacity(nibbles.len().div_ceil(2));
    let mut chunks = nibbles.chunks_exact(2);
    for pair in &mut chunks {
        out.push((pair[0] << 4) | pair[1]);
    }
    if let [last] = chunks.remainder() {
        out.push(last << 4);
    }
    out
}

/// Renders a nibble path as the hex string a reader would expect, one
/// character per nibble.
pub fn nibbles_to_hex(nibbles: &[Nibble]) -> String {
    nibbles.iter().map(|n| format!("{:x}", n)).collect()
}

/// The key of a value: the hex digit path of `digest(value)`, the
/// mechanism by which membership in this structure is always
/// self-describing rather than assigned by a caller.
pub fn path_of(value: &[u8]) -> Vec<Nibble> {
    bytes_to_nibbles(digest(value).as_bytes())
}

/// Length of the shared prefix of two nibble paths.
pub fn common_prefix_len(a: &[Nibble], b: &[Nibble]) -> usize {
    a.iter().zip(b.iter()).take_while(|(x, y)| x == y).count()
}

#[cfg(test)]
mod nibble_test;
