// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pony-core

//! Template filling.
//!
//! A full chunk encodes to exactly [`SLOTS`] base64 characters with no
//! padding. The terminal chunk is shorter: its padding is stripped, one
//! terminator is appended, and the remaining slots are filled with random
//! alphabet characters so the block looks like any other.
//!
//! The camouflage generator is supplied by the caller. Tests pass a seeded
//! `ChaCha20Rng` and can pin the exact output.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rand::Rng;

use crate::art::{Template, ALPHABET, CHUNK_SIZE, SLOTS, TERMINATOR};

/// Turns chunks of compressed bytes into art blocks.
pub struct BlockFiller<G> {
    template: Template,
    rng: G,
}

impl<G: Rng> BlockFiller<G> {
    /// Filler for the built-in template.
    pub fn new(rng: G) -> Self {
        Self { template: Template::pony(), rng }
    }

    /// Block for a full chunk of exactly [`CHUNK_SIZE`] bytes.
    pub fn full_block(&self, chunk: &[u8]) -> String {
        debug_assert_eq!(chunk.len(), CHUNK_SIZE);
        let text = STANDARD.encode(chunk);
        debug_assert_eq!(text.len(), SLOTS, "full chunk must fill the template unpadded");
        self.template.fill(text.as_bytes())
    }

    /// Block for the terminal chunk (`0..CHUNK_SIZE` bytes).
    ///
    /// An empty chunk yields a block that is all terminator and camouflage.
    pub fn terminal_block(&mut self, chunk: &[u8]) -> String {
        let slots = self.terminal_slots(chunk);
        self.template.fill(&slots)
    }

    /// Slot contents for the terminal chunk: stripped encoding, terminator,
    /// camouflage.
    pub fn terminal_slots(&mut self, chunk: &[u8]) -> Vec<u8> {
        debug_assert!(chunk.len() < CHUNK_SIZE);
        let mut slots = STANDARD.encode(chunk).into_bytes();
        while slots.last() == Some(&TERMINATOR) {
            slots.pop();
        }
        slots.push(TERMINATOR);
        while slots.len() < SLOTS {
            // u32 range keeps the draw identical on 32- and 64-bit targets.
            slots.push(ALPHABET[self.rng.gen_range(0..ALPHABET.len() as u32) as usize]);
        }
        slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::art::{is_payload, PLACEHOLDER, PONY};
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn filler(seed: u64) -> BlockFiller<ChaCha20Rng> {
        BlockFiller::new(ChaCha20Rng::seed_from_u64(seed))
    }

    fn slot_chars(block: &str) -> Vec<u8> {
        PONY.bytes()
            .zip(block.bytes())
            .filter(|&(t, _)| t == PLACEHOLDER)
            .map(|(_, b)| b)
            .collect()
    }

    #[test]
    fn full_block_carries_encoding_verbatim() {
        let chunk: Vec<u8> = (0..CHUNK_SIZE).map(|i| (i % 256) as u8).collect();
        let block = filler(1).full_block(&chunk);
        assert_eq!(slot_chars(&block), STANDARD.encode(&chunk).into_bytes());
        assert!(!block.contains('='));
    }

    #[test]
    fn terminal_block_has_single_terminator() {
        for len in [0usize, 1, 2, 3, 4, 100, CHUNK_SIZE - 1] {
            let chunk = vec![0xA5u8; len];
            let block = filler(7).terminal_block(&chunk);
            assert_eq!(block.matches('=').count(), 1, "len={len}");
            assert_eq!(block.len(), PONY.len());
        }
    }

    #[test]
    fn terminator_follows_stripped_encoding() {
        let chunk = [0x01u8, 0x02];
        let slots = filler(3).terminal_slots(&chunk);
        // "AQI=" stripped to "AQI".
        assert_eq!(&slots[..4], b"AQI=");
        assert_eq!(slots.len(), SLOTS);
        assert!(slots[4..].iter().all(|&b| is_payload(b) && b != TERMINATOR));
    }

    #[test]
    fn empty_chunk_starts_with_terminator() {
        let slots = filler(0).terminal_slots(&[]);
        assert_eq!(slots[0], TERMINATOR);
        assert_eq!(slots.len(), SLOTS);
    }

    #[test]
    fn camouflage_is_deterministic_per_seed() {
        let a = filler(42).terminal_block(b"abc");
        let b = filler(42).terminal_block(b"abc");
        let c = filler(43).terminal_block(b"abc");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn camouflage_uses_whole_alphabet() {
        let mut f = filler(9);
        let mut seen = [false; 256];
        for _ in 0..4 {
            for b in f.terminal_slots(&[]).into_iter().skip(1) {
                seen[b as usize] = true;
            }
        }
        assert!(ALPHABET.iter().all(|&b| seen[b as usize]));
    }
}
