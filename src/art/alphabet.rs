// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pony-core

//! The payload alphabet.
//!
//! Payload characters are the 64 symbols of standard base64 plus the
//! terminator `=`. Everything else found on an art line is decoration or
//! noise and is dropped by the decoder.

/// The 64 base64 symbols, in encoding order. The terminator is not part of
/// this table, so camouflage drawn from it can never end the stream early.
pub const ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// End-of-data sentinel. Doubles as the base64 padding character.
pub const TERMINATOR: u8 = b'=';

/// Two-character border marker. Lines without it carry no payload.
pub const BORDER: &[u8; 2] = b"**";

/// Returns `true` for characters that survive line filtering: letters,
/// digits, `+`, `/` and the terminator.
#[inline]
pub fn is_payload(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'+' || b == b'/' || b == TERMINATOR
}

/// Returns `true` if `line` contains the art border marker.
pub fn has_border(line: &[u8]) -> bool {
    line.windows(BORDER.len()).any(|w| w == BORDER)
}

/// Number of padding characters needed to bring a base64 remainder of
/// `len` characters up to the next multiple of four.
///
/// Computed as `3 - ((len - 1) mod 4)` for non-empty input; an empty
/// remainder needs no padding.
pub fn pad_count(len: usize) -> usize {
    if len == 0 {
        0
    } else {
        3 - (len - 1) % 4
    }
}
