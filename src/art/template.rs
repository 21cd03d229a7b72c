// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pony-core

//! The compiled-in art template.
//!
//! The template is a fixed block of ASCII art. Every occurrence of
//! [`PLACEHOLDER`] is a slot that receives one payload character; every
//! other character is copied through unchanged. The slot count is computed
//! at compile time and fixes the chunk size for the whole process.

/// Placeholder marker inside the template.
pub const PLACEHOLDER: u8 = b'x';

/// The pony.
pub const PONY: &str = include_str!("pony.txt");

/// Number of placeholder slots in [`PONY`].
pub const SLOTS: usize = count_placeholders(PONY.as_bytes());

/// Raw bytes per block: the largest byte count whose base64 encoding fits
/// `SLOTS` characters without padding.
pub const CHUNK_SIZE: usize = SLOTS / 4 * 3;

const _: () = assert!(SLOTS % 4 == 0, "template slot count must be a multiple of 4");
const _: () = assert!(CHUNK_SIZE > 0);

const fn count_placeholders(art: &[u8]) -> usize {
    let mut i = 0;
    let mut n = 0;
    while i < art.len() {
        if art[i] == PLACEHOLDER {
            n += 1;
        }
        i += 1;
    }
    n
}

/// An art skeleton with placeholder slots.
#[derive(Debug, Clone, Copy)]
pub struct Template {
    art: &'static str,
    slots: usize,
}

impl Template {
    /// The built-in pony template.
    pub const fn pony() -> Self {
        Self { art: PONY, slots: SLOTS }
    }

    /// The raw skeleton, placeholders included.
    pub fn art(&self) -> &'static str {
        self.art
    }

    /// Number of placeholder slots.
    pub fn slots(&self) -> usize {
        self.slots
    }

    /// Splice `payload` into the placeholder slots, left to right.
    ///
    /// # Panics
    /// If `payload` does not hold exactly [`slots`](Self::slots) characters.
    /// A partly filled block would not decode.
    pub fn fill(&self, payload: &[u8]) -> String {
        assert_eq!(payload.len(), self.slots, "payload must fill every slot");
        debug_assert!(payload.is_ascii());

        let mut next = payload.iter();
        self.art
            .chars()
            .map(|c| {
                if c == PLACEHOLDER as char {
                    next.next().map_or(c, |&b| char::from(b))
                } else {
                    c
                }
            })
            .collect()
    }
}

impl Default for Template {
    fn default() -> Self {
        Self::pony()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::art::alphabet::{has_border, is_payload, ALPHABET};

    #[test]
    fn pony_dimensions() {
        assert_eq!(SLOTS, 1264);
        assert_eq!(CHUNK_SIZE, 948);
        assert_eq!(Template::pony().slots(), SLOTS);
    }

    #[test]
    fn skeleton_is_pure_decoration() {
        // Only the placeholder may look like payload.
        for b in PONY.bytes() {
            assert!(b == PLACEHOLDER || !is_payload(b), "unexpected {:?}", b as char);
        }
    }

    #[test]
    fn every_slot_line_has_border() {
        // The decoder skips lines without `**`, so no slot may live on one.
        for line in PONY.lines() {
            if line.bytes().any(|b| b == PLACEHOLDER) {
                assert!(has_border(line.as_bytes()), "slot line without border: {line:?}");
            }
        }
    }

    #[test]
    fn fill_preserves_shape() {
        let t = Template::pony();
        let payload: Vec<u8> = (0..SLOTS).map(|i| ALPHABET[i % 64]).collect();
        let block = t.fill(&payload);
        assert_eq!(block.len(), PONY.len());
        for (a, b) in PONY.bytes().zip(block.bytes()) {
            if a != PLACEHOLDER {
                assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn fill_consumes_in_order() {
        let t = Template::pony();
        let payload: Vec<u8> = (0..SLOTS).map(|i| ALPHABET[(i * 7) % 64]).collect();
        let block = t.fill(&payload);
        let slots: Vec<u8> = PONY
            .bytes()
            .zip(block.bytes())
            .filter(|&(a, _)| a == PLACEHOLDER)
            .map(|(_, b)| b)
            .collect();
        assert_eq!(slots, payload);
    }

    #[test]
    #[should_panic(expected = "payload must fill every slot")]
    fn short_payload_is_rejected() {
        let payload = vec![ALPHABET[0]; SLOTS - 1];
        Template::pony().fill(&payload);
    }
}
