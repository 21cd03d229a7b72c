// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pony-core

//! # pony-core
//!
//! Reversible text camouflage. Any byte stream is compressed with Brotli,
//! base64-encoded and spliced into the placeholder slots of a fixed ASCII-art
//! pony. The output looks like a stack of identical drawings; decoding
//! recovers the exact input, even when the art is surrounded by unrelated
//! lines of text.
//!
//! This is visual obfuscation only. There is no encryption and no integrity
//! check beyond what Brotli detects on its own.
//!
//! The carrier (`art` module) has no external dependencies. The pipeline
//! (`codec` module) uses Brotli, base64 and a caller-supplied random
//! generator for the camouflage after the terminator.
//!
//! # Quick start
//!
//! ```rust
//! use pony_core::{decode_str, encode_bytes};
//! use rand::SeedableRng;
//!
//! let rng = rand_chacha::ChaCha20Rng::seed_from_u64(1);
//! let art = encode_bytes(b"secret", rng).unwrap();
//! assert_eq!(decode_str(&art).unwrap(), b"secret");
//! ```

pub mod art;
pub mod codec;

pub use art::{Template, CHUNK_SIZE, SLOTS};
pub use codec::{
    decode, decode_str, encode, encode_bytes, encode_python, CodecError, CompressionSettings,
    DecodeState, DecodeSummary, Decoder, EncodeSummary, Encoder,
};
